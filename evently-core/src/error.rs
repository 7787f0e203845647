//! Error types for evently.

use std::fmt;

use thiserror::Error;

/// Errors that can occur in evently operations.
#[derive(Error, Debug)]
pub enum EventlyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Stored '{key}' is not valid: {message}")]
    Decode { key: String, message: String },

    #[error("Serialization error: {0}")]
    Encode(String),

    #[error("{0}")]
    Validation(ValidationErrors),

    #[error("Event not found: {0}")]
    EventNotFound(String),
}

/// Result type alias for evently operations.
pub type EventlyResult<T> = Result<T, EventlyError>;

/// A single rejected form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every field error found while validating one form, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Messages reported for one field.
    pub fn for_field(&self, field: &str) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message.as_str())
            .collect()
    }

    /// `Ok(())` when nothing was reported, otherwise a `Validation` error.
    pub fn into_result(self) -> EventlyResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(EventlyError::Validation(self))
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let lines: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", lines.join("; "))
    }
}
