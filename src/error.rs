//! Crate error type for the fallible edges: storage, parsing, validation, config.
//!
//! Calculations never return this; they are total over their inputs.

use thiserror::Error;

/// A single rejected form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Error, Debug)]
pub enum RealityError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed JSON blob: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {}", join_fields(.0))]
    Validation(Vec<FieldError>),

    #[error("No session with id '{0}'")]
    SessionNotFound(String),

    #[error("Unknown game type '{0}'")]
    UnknownGameType(String),

    #[error("Unknown quick template '{0}'")]
    UnknownTemplate(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

fn join_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, RealityError>;
