use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Errores de validación del formulario. Todos se devuelven como 400 con
/// cuerpo `{"error": "..."}`.
#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("Attended classes cannot be more than total classes held!")]
    AttendedExceedsTotal,

    #[error("Percentage must be between 0 and 100")]
    PercentageOutOfRange,

    #[error("invalid JSON body: {0}")]
    InvalidJson(String),

    #[error("invalid value for '{field}': {value}")]
    InvalidNumber { field: String, value: String },
}

impl ResponseError for FormError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({"error": self.to_string()}))
    }
}

/// Errores al leer la configuración del entorno.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("ATTENDANCE_CLASSES_PER_DAY must be a positive integer, got '{0}'")]
    InvalidClassesPerDay(String),

    #[error("ATTENDANCE_BIND must look like host:port, got '{0}'")]
    InvalidBind(String),
}

impl From<ConfigError> for std::io::Error {
    fn from(e: ConfigError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    }
}
