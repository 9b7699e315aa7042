use serde::{Deserialize, Serialize};
use shared::model::SelfLookupFailure;
use thiserror::Error as ThisError;

/// Body of every rejected api call: `{"error": "<code>"}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ErrorInfo {
    pub error: String,
}

/// Define all possible errors
#[derive(ThisError, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// 400
    #[error("{0}")]
    BadRequest(String),

    /// 401
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// 403
    #[error("Forbidden")]
    Forbidden,

    /// 404
    #[error("Not Found")]
    NotFound,

    /// 409
    #[error("Conflict: {0}")]
    Conflict(String),

    /// 500
    #[error("Internal Server Error")]
    InternalServerError,

    /// serde deserialize error
    #[error("Deserialize Error")]
    DeserializeError,

    /// request error
    #[error("Http Request Error")]
    RequestError,
}

impl Error {
    /// Maps a non-success status and its error code to an error.
    pub fn from_status(status: u16, code: Option<String>) -> Self {
        match status {
            400 => Error::BadRequest(code.unwrap_or_else(|| status.to_string())),
            401 => Error::Unauthorized(code.unwrap_or_default()),
            403 => Error::Forbidden,
            404 => Error::NotFound,
            409 => Error::Conflict(code.unwrap_or_default()),
            500 => Error::InternalServerError,
            _ => Error::RequestError,
        }
    }

    /// Only a 401 says the token itself is no longer accepted.
    pub fn self_lookup_failure(&self) -> SelfLookupFailure {
        match self {
            Error::Unauthorized(_) => SelfLookupFailure::Rejected,
            _ => SelfLookupFailure::Unavailable,
        }
    }

    /// Text shown in the panel notices.
    pub fn notice(&self) -> String {
        match self {
            Error::BadRequest(code) => match code.as_str() {
                "missing_fields" => "Completa los campos obligatorios.".to_string(),
                "invalid_email" => "El email no es válido.".to_string(),
                "weak_password" => "La contraseña debe tener al menos 8 caracteres.".to_string(),
                "invalid_role" => "Rol no válido.".to_string(),
                "invalid_id" => "Identificador no válido.".to_string(),
                other => format!("Solicitud rechazada ({other})."),
            },
            Error::Unauthorized(code) if code == "invalid_credentials" => "Credenciales incorrectas.".to_string(),
            Error::Unauthorized(_) => "Tu sesión no es válida, vuelve a iniciar sesión.".to_string(),
            Error::Forbidden => "No tienes permisos para esta acción.".to_string(),
            Error::NotFound => "No encontrado.".to_string(),
            Error::Conflict(code) if code == "email_exists" => "Ese email ya está registrado.".to_string(),
            Error::Conflict(code) => format!("Conflicto ({code})."),
            Error::InternalServerError => "Error del servidor.".to_string(),
            Error::DeserializeError | Error::RequestError => "No se pudo conectar con el servidor.".to_string(),
        }
    }
}
