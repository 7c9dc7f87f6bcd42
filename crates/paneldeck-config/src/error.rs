//! Error types for configuration loading

use thiserror::Error;

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors produced while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error reading a configuration file
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Configuration text could not be parsed
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Configuration parsed but failed validation
    #[error("validation error: {field} - {message}")]
    Validation { field: String, message: String },
}

impl ConfigError {
    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        ConfigError::Parse {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}
