//! Error types for the correo demo services

use thiserror::Error;

/// Field-level validation errors, surfaced inline next to the offending
/// form field. Messages are the exact texts the site displays.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Empty input counts as an untouched field; the UI shows no message.
    #[error("el campo está vacío")]
    Empty,

    #[error("El número de tracking debe tener 13 caracteres")]
    InvalidLength,

    #[error("Solo se permiten letras y números")]
    InvalidCharacters,

    #[error("Este campo es obligatorio")]
    MissingRequiredField { field: &'static str },

    #[error("El peso debe ser un número mayor a cero")]
    InvalidWeight,
}

impl ValidationError {
    /// Form field the error belongs to, when tied to a specific one
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::MissingRequiredField { field } => Some(field),
            ValidationError::InvalidWeight => Some("peso"),
            _ => None,
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Validation(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, Error>;
