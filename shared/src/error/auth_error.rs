use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Request-level rejections of the authentication layer.
///
/// Every variant is terminal for the request it occurs in. The wire form is
/// the snake-case code, e.g. `{"error": "missing_token"}`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthError {
    #[error("missing bearer token")]
    MissingToken,
    #[error("invalid token")]
    InvalidToken,
    #[error("no role claim")]
    Unauthorized,
    #[error("insufficient role")]
    Forbidden,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("invalid role")]
    InvalidRole,
}

const MISSING_TOKEN: &str = "missing_token";
const INVALID_TOKEN: &str = "invalid_token";
const UNAUTHORIZED: &str = "unauthorized";
const FORBIDDEN: &str = "forbidden";
const INVALID_CREDENTIALS: &str = "invalid_credentials";
const INVALID_ROLE: &str = "invalid_role";

impl AuthError {
    pub const fn code(self) -> &'static str {
        match self {
            AuthError::MissingToken => MISSING_TOKEN,
            AuthError::InvalidToken => INVALID_TOKEN,
            AuthError::Unauthorized => UNAUTHORIZED,
            AuthError::Forbidden => FORBIDDEN,
            AuthError::InvalidCredentials => INVALID_CREDENTIALS,
            AuthError::InvalidRole => INVALID_ROLE,
        }
    }

    /// 401 for everything that is about *who* the caller is, 403 when the
    /// caller is known but not allowed, 400 for a rejected role value.
    pub const fn status_code(self) -> u16 {
        match self {
            AuthError::MissingToken
            | AuthError::InvalidToken
            | AuthError::Unauthorized
            | AuthError::InvalidCredentials => 401,
            AuthError::Forbidden => 403,
            AuthError::InvalidRole => 400,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AuthError;

    #[test]
    fn codes_match_serde_names() {
        for err in [
            AuthError::MissingToken,
            AuthError::InvalidToken,
            AuthError::Unauthorized,
            AuthError::Forbidden,
            AuthError::InvalidCredentials,
            AuthError::InvalidRole,
        ] {
            let json = serde_json::to_string(&err).unwrap();
            assert_eq!(json, format!("\"{}\"", err.code()));
            assert_eq!(serde_json::from_str::<AuthError>(&json).unwrap(), err);
        }
    }

    #[test]
    fn forbidden_is_distinct_from_missing_token() {
        assert_eq!(AuthError::MissingToken.status_code(), 401);
        assert_eq!(AuthError::Forbidden.status_code(), 403);
    }
}
