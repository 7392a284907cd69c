use std::fmt;

use config::ConfigError;
use derive_more::Display;
use serde::Serialize;
use validator::ValidationErrors;

/// Everything that can go wrong between issuing a request and holding a typed payload.
///
/// Views never see these variants; hooks log them and keep only a
/// human-readable message.
#[derive(Debug, Display, Clone, PartialEq)]
pub enum FetchError {
    #[display("Network error: {_0}")]
    Network(String),

    #[display("HTTP error! status: {_0}")]
    Status(u16),

    #[display("Response was not JSON (content type: {_0})")]
    NotJson(String),

    #[display("Malformed JSON payload: {_0}")]
    MalformedPayload(String),

    #[display("Unexpected response shape: {_0}")]
    UnexpectedShape(String),
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => FetchError::Status(status.as_u16()),
            None if err.is_decode() => FetchError::MalformedPayload(err.to_string()),
            None => FetchError::Network(err.to_string()),
        }
    }
}

#[derive(Debug)]
pub enum ContactError {
    Validation(Vec<FieldError>),
    InFlight,
    Submit(String),
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactError::Validation(errors) => {
                let messages = errors.iter()
                    .map(|e| format!("{}:{}", e.field, e.message))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "validation error: {}", messages)
            }
            ContactError::InFlight => write!(f, "A message is already being sent"),
            ContactError::Submit(msg) => write!(f, "Failed to send message: {}", msg),
        }
    }
}

impl std::error::Error for ContactError {}

impl From<ValidationErrors> for ContactError {
    fn from(errors: ValidationErrors) -> Self {
        let mut field_errors: Vec<FieldError> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(|e| FieldError {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "Invalid value".to_string()),
                })
            })
            .collect();

        // HashMap iteration order is arbitrary
        field_errors.sort_by(|a, b| a.field.cmp(&b.field));

        ContactError::Validation(field_errors)
    }
}

impl From<FetchError> for ContactError {
    fn from(err: FetchError) -> Self {
        ContactError::Submit(err.to_string())
    }
}

#[derive(Debug)]
pub enum AppError {
    Config(String),
    Storage(String),
    Http(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Storage(msg) => write!(f, "Storage error: {}", msg),
            AppError::Http(msg) => write!(f, "HTTP client error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Storage(format!("invalid preference file: {}", err))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Http(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}
