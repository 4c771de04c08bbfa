//! Core error types for terminalplus-core.
//!
//! The ranking engine itself is total and never fails. Errors only come from
//! the boundary: turning raw timestamps into a snapshot, and loading or
//! validating the tunable policy.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for terminalplus-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
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
    MissingKey(String),

    /// Failed to serialize configuration
    #[error("Failed to serialize configuration: {0}")]
    SerializeFailed(String),
}

/// Validation errors.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    /// Epoch-millisecond value outside the representable range
    #[error("Invalid timestamp for '{field}': {millis} ms is out of range")]
    InvalidTimestamp { field: &'static str, millis: i64 },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl From<ValidationError> for ConfigError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidValue { field, message } => ConfigError::InvalidValue {
                key: field,
                message,
            },
            ValidationError::InvalidTimestamp { field, .. } => ConfigError::InvalidValue {
                key: field.to_string(),
                message: err.to_string(),
            },
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
