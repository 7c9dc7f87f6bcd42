//! Configuration data structures and validation

use std::collections::HashMap;

use paneldeck_taborder::Hotkey;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Top-level dashboard configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Border color theme
    pub theme: ThemeConfig,
    /// Periodic redraw interval in milliseconds
    pub tick_interval_ms: u64,
    /// Number of ports shown by port-oriented panels
    pub port_count: u16,
    /// Hotkey overrides keyed by region name
    ///
    /// `{ "Summary": { "char": "s" }, "Settings": { "ctrl": "e" } }`.
    /// Regions not listed keep their built-in hotkeys. Two regions on the
    /// same page bound to one key are rejected at registration, not here,
    /// since the same key may legitimately recur across pages.
    pub hotkeys: HashMap<String, Hotkey>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            theme: ThemeConfig::default(),
            tick_interval_ms: 250,
            port_count: 8,
            hotkeys: HashMap::new(),
        }
    }
}

impl AppConfig {
    /// Hotkey for the named region: the configured override, or `fallback`
    pub fn region_hotkey(&self, region: &str, fallback: Hotkey) -> Hotkey {
        self.hotkeys.get(region).copied().unwrap_or(fallback)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::validation(
                "tick_interval_ms",
                "tick interval must be non-zero",
            ));
        }
        self.theme.validate()?;
        Ok(())
    }
}

/// Border colors by name or `#rrggbb` value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Border color of unfocused regions
    pub default_border: String,
    /// Border color of the focused region
    pub highlight_border: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            default_border: "green".to_string(),
            highlight_border: "blue".to_string(),
        }
    }
}

impl ThemeConfig {
    /// Validate that both color values resolve
    pub fn validate(&self) -> Result<()> {
        parse_color(&self.default_border)
            .map_err(|e| ConfigError::validation("theme.default_border", e.to_string()))?;
        parse_color(&self.highlight_border)
            .map_err(|e| ConfigError::validation("theme.highlight_border", e.to_string()))?;
        Ok(())
    }

    /// Resolve the configured colors
    ///
    /// Returns `(default_border, highlight_border)`; call after `validate`,
    /// but resolution failures are still reported as errors rather than
    /// panicking.
    pub fn border_colors(&self) -> Result<(Color, Color)> {
        Ok((
            parse_color(&self.default_border)?,
            parse_color(&self.highlight_border)?,
        ))
    }
}

/// Parse a color name or `#rrggbb` value into a terminal color
pub fn parse_color(value: &str) -> Result<Color> {
    let normalized = value.trim().to_ascii_lowercase();
    if let Some(hex) = normalized.strip_prefix('#') {
        if hex.len() != 6 {
            return Err(ConfigError::parse(format!(
                "hex color `{value}` must be #rrggbb"
            )));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| ConfigError::parse(format!("invalid hex color `{value}`")))
        };
        return Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?));
    }

    match normalized.as_str() {
        "black" => Ok(Color::Black),
        "red" => Ok(Color::Red),
        "green" => Ok(Color::Green),
        "yellow" => Ok(Color::Yellow),
        "blue" => Ok(Color::Blue),
        "magenta" => Ok(Color::Magenta),
        "cyan" => Ok(Color::Cyan),
        "gray" | "grey" => Ok(Color::Gray),
        "darkgray" | "darkgrey" | "dark-gray" => Ok(Color::DarkGray),
        "lightred" | "light-red" => Ok(Color::LightRed),
        "lightgreen" | "light-green" => Ok(Color::LightGreen),
        "lightyellow" | "light-yellow" => Ok(Color::LightYellow),
        "lightblue" | "light-blue" => Ok(Color::LightBlue),
        "lightmagenta" | "light-magenta" => Ok(Color::LightMagenta),
        "lightcyan" | "light-cyan" => Ok(Color::LightCyan),
        "white" => Ok(Color::White),
        _ => Err(ConfigError::parse(format!("unknown color `{value}`"))),
    }
}
