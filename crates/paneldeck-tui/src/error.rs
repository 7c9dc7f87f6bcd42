//! Error types for the dashboard TUI

use thiserror::Error;

/// Result type for TUI operations
pub type TuiResult<T> = std::result::Result<T, TuiError>;

/// Errors produced by the dashboard TUI
#[derive(Error, Debug)]
pub enum TuiError {
    /// Terminal IO errors
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(#[from] paneldeck_config::ConfigError),

    /// Navigation core errors
    #[error("navigation error: {0}")]
    TabOrder(#[from] paneldeck_taborder::TabOrderError),
}
