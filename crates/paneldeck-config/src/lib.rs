//! Configuration loading for paneldeck dashboards
//!
//! Accepts JSON or JSON-C (comments and trailing commas tolerated) from a
//! file, a text buffer, or an already-built [`AppConfig`], validating before
//! acceptance. Theme colors are configured by name or `#rrggbb` value and
//! resolved to terminal colors here, so the rest of the workspace never
//! handles raw color strings.

pub mod error;
pub mod loader;
pub mod types;

// Re-export public types
pub use error::{ConfigError, Result};
pub use loader::{open_with_config, open_with_file, open_with_text};
pub use types::{AppConfig, ThemeConfig, parse_color};
