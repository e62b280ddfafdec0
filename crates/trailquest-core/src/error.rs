//! Core error types for trailquest-core.
//!
//! Every engine operation either applies a well-defined state transition or
//! leaves state unchanged; the only recoverable failure surface is booking
//! validation, which reports one error per offending field.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Core error type for trailquest-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Booking submission errors
    #[error("Booking error: {0}")]
    Booking(#[from] BookingError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// A single invalid booking field with its user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Booking-specific errors.
#[derive(Error, Debug)]
pub enum BookingError {
    /// Submission rejected; carries one entry per invalid field so the
    /// caller can highlight each offending input.
    #[error("Booking rejected: {}", format_field_errors(.0))]
    Rejected(Vec<FieldError>),

    /// Submit was asked to use the staged draft but none exists.
    #[error("No booking draft staged")]
    NoDraft,
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(FieldError::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to resolve the data directory
    #[error("Failed to access data directory: {0}")]
    DataDir(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_lists_every_field() {
        let err = BookingError::Rejected(vec![
            FieldError::new("email", "Invalid email address"),
            FieldError::new("phone", "Phone number must be at least 10 digits"),
        ]);
        let msg = err.to_string();
        assert!(msg.contains("email: Invalid email address"));
        assert!(msg.contains("phone: Phone number must be at least 10 digits"));
    }

    #[test]
    fn field_error_display() {
        let err = FieldError::new("name", "Name must be at least 2 characters");
        assert_eq!(err.to_string(), "name: Name must be at least 2 characters");
    }
}
