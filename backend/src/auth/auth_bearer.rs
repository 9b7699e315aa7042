use axum::http::{header, HeaderMap};
use shared::utils::CONSTANTS;

/// Token of an `Authorization: Bearer <token>` header value.
pub fn parse_bearer(value: &str) -> Option<&str> {
    CONSTANTS.re_bearer
        .captures(value)
        .and_then(|caps| caps.name("token"))
        .map(|token| token.as_str().trim())
        .filter(|token| !token.is_empty())
}

pub fn bearer_from_headers(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_bearer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_forms() {
        assert_eq!(parse_bearer("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(parse_bearer("Bearer   abc"), Some("abc"));
        assert_eq!(parse_bearer("Bearer "), None);
        assert_eq!(parse_bearer("Basic abc"), None);
        assert_eq!(parse_bearer("bearer abc"), None);
        assert_eq!(parse_bearer(""), None);
    }

    #[test]
    fn header_lookup() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_from_headers(&headers), None);
        headers.insert(header::AUTHORIZATION, "Bearer tok".parse().unwrap());
        assert_eq!(bearer_from_headers(&headers), Some("tok"));
    }
}
