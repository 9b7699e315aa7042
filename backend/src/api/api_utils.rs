use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;
use shared::error::AuthError;

pub const ERR_MISSING_FIELDS: &str = "missing_fields";
pub const ERR_INVALID_EMAIL: &str = "invalid_email";
pub const ERR_WEAK_PASSWORD: &str = "weak_password";
pub const ERR_EMAIL_EXISTS: &str = "email_exists";
pub const ERR_INVALID_ID: &str = "invalid_id";
pub const ERR_NOT_FOUND: &str = "not_found";
pub const ERR_INVALID_PAYLOAD: &str = "invalid_payload";
pub const ERR_SERVER: &str = "server_error";

/// `{"error": code}` with the given status.
pub fn error_response(status: StatusCode, code: &str) -> Response {
    (status, axum::Json(json!({"error": code}))).into_response()
}

pub fn auth_error_response(err: AuthError) -> Response {
    let status = StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::UNAUTHORIZED);
    error_response(status, err.code())
}

pub fn bad_request(code: &str) -> Response {
    error_response(StatusCode::BAD_REQUEST, code)
}

pub fn server_error() -> Response {
    error_response(StatusCode::INTERNAL_SERVER_ERROR, ERR_SERVER)
}

pub fn json_response<T: Serialize>(data: &T) -> Response {
    (StatusCode::OK, axum::Json(data)).into_response()
}

#[macro_export]
macro_rules! try_payload {
    ($payload:expr) => {
        match $payload {
            Ok(axum::Json(value)) => value,
            Err(err) => {
                log::debug!("Rejected payload: {err}");
                return $crate::api::api_utils::bad_request($crate::api::api_utils::ERR_INVALID_PAYLOAD);
            }
        }
    };
}

#[macro_export]
macro_rules! try_storage {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(err) => {
                log::error!("{err}");
                return $crate::api::api_utils::server_error();
            }
        }
    };
}

pub use try_payload;
pub use try_storage;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_statuses() {
        assert_eq!(auth_error_response(AuthError::Forbidden).status(), StatusCode::FORBIDDEN);
        assert_eq!(auth_error_response(AuthError::MissingToken).status(), StatusCode::UNAUTHORIZED);
        assert_eq!(auth_error_response(AuthError::InvalidRole).status(), StatusCode::BAD_REQUEST);
    }
}
