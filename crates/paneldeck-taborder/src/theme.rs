//! Shared border-color theme for focused and unfocused regions

use std::cell::Cell;
use std::rc::Rc;

use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BorderColors {
    default: Color,
    highlight: Color,
}

/// The two-state border-color policy shared across tab orders
///
/// `FocusTheme` is a cheap cloneable handle: every clone points at the same
/// pair of colors, so all panels constructed from one handle keep a consistent
/// visual theme and a setter call on any clone is visible to all of them.
/// Independent handles do not interfere.
#[derive(Debug, Clone)]
pub struct FocusTheme {
    colors: Rc<Cell<BorderColors>>,
}

impl FocusTheme {
    /// Create a theme with explicit border colors
    pub fn new(default_color: Color, highlight_color: Color) -> Self {
        FocusTheme {
            colors: Rc::new(Cell::new(BorderColors {
                default: default_color,
                highlight: highlight_color,
            })),
        }
    }

    /// Border color of unfocused regions
    pub fn default_color(&self) -> Color {
        self.colors.get().default
    }

    /// Border color of the focused region
    pub fn highlight_color(&self) -> Color {
        self.colors.get().highlight
    }

    /// Set the unfocused border color for every sharer of this theme
    pub fn set_default_color(&self, color: Color) {
        let mut colors = self.colors.get();
        colors.default = color;
        self.colors.set(colors);
    }

    /// Set the focused border color for every sharer of this theme
    pub fn set_highlight_color(&self, color: Color) {
        let mut colors = self.colors.get();
        colors.highlight = color;
        self.colors.set(colors);
    }
}

impl Default for FocusTheme {
    /// Green default border, blue highlight border
    fn default() -> Self {
        FocusTheme::new(Color::Green, Color::Blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_green_and_blue() {
        let theme = FocusTheme::default();
        assert_eq!(theme.default_color(), Color::Green);
        assert_eq!(theme.highlight_color(), Color::Blue);
    }

    #[test]
    fn clones_share_color_state() {
        let theme = FocusTheme::default();
        let other = theme.clone();
        other.set_highlight_color(Color::Magenta);
        assert_eq!(theme.highlight_color(), Color::Magenta);
    }

    #[test]
    fn independent_themes_do_not_interfere() {
        let a = FocusTheme::default();
        let b = FocusTheme::default();
        a.set_default_color(Color::Red);
        assert_eq!(b.default_color(), Color::Green);
    }
}
