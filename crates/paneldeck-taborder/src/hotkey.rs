//! Hotkey values bound to focusable regions

use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

/// A key that jumps focus directly to a region
///
/// Either a printable character, a Ctrl chord, or a function key. Hotkeys are
/// matched against raw terminal key events during dispatch; Tab and Backtab
/// are never hotkeys (they drive cyclic navigation instead).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hotkey {
    /// Printable character, case-sensitive (`'a'` and `'A'` differ)
    Char(char),
    /// Ctrl + character chord
    Ctrl(char),
    /// Function key F1..F12
    Function(u8),
}

impl Hotkey {
    /// Check whether a terminal key event activates this hotkey
    pub fn matches(&self, event: &KeyEvent) -> bool {
        let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
        match (*self, event.code) {
            (Hotkey::Char(c), KeyCode::Char(k)) => !ctrl && c == k,
            (Hotkey::Ctrl(c), KeyCode::Char(k)) => ctrl && c == k,
            (Hotkey::Function(n), KeyCode::F(k)) => n == k,
            _ => false,
        }
    }

    /// Derive the hotkey a key event would activate, if any
    pub fn from_event(event: &KeyEvent) -> Option<Hotkey> {
        match event.code {
            KeyCode::Char(c) => {
                if event.modifiers.contains(KeyModifiers::CONTROL) {
                    Some(Hotkey::Ctrl(c))
                } else {
                    Some(Hotkey::Char(c))
                }
            }
            KeyCode::F(n) => Some(Hotkey::Function(n)),
            _ => None,
        }
    }
}

impl From<char> for Hotkey {
    fn from(c: char) -> Self {
        Hotkey::Char(c)
    }
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hotkey::Char(c) => write!(f, "'{c}'"),
            Hotkey::Ctrl(c) => write!(f, "Ctrl+{}", c.to_ascii_uppercase()),
            Hotkey::Function(n) => write!(f, "F{n}"),
        }
    }
}
