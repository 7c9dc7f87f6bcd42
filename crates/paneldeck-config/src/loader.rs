//! Configuration entry points: from struct, text, or file

use std::path::Path;

use crate::error::{ConfigError, Result};
use crate::types::AppConfig;

/// Accept an already-built configuration after validating it
pub fn open_with_config(config: AppConfig) -> Result<AppConfig> {
    config.validate()?;
    Ok(config)
}

/// Parse configuration from JSON or JSON-C text
///
/// Comments and trailing commas are tolerated. The text must describe a JSON
/// object; empty input and top-level arrays or scalars are rejected.
pub fn open_with_text(text: &str) -> Result<AppConfig> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::parse("empty configuration text"));
    }

    let value = jsonc_parser::parse_to_serde_value(trimmed, &Default::default())
        .map_err(|e| ConfigError::parse(e.to_string()))?
        .ok_or_else(|| ConfigError::parse("configuration text contains no value"))?;
    if !value.is_object() {
        return Err(ConfigError::parse(
            "configuration must be a JSON object starting with '{'",
        ));
    }

    let config: AppConfig =
        serde_json::from_value(value).map_err(|e| ConfigError::parse(e.to_string()))?;
    open_with_config(config)
}

/// Load configuration from a JSON or JSON-C file
pub fn open_with_file(path: impl AsRef<Path>) -> Result<AppConfig> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading configuration");
    let text = std::fs::read_to_string(path)?;
    open_with_text(&text)
}
