//! Error types for the navigation core

use thiserror::Error;

use crate::hotkey::Hotkey;

/// Result type for tab-order operations
pub type Result<T> = std::result::Result<T, TabOrderError>;

/// Errors produced by the navigation core
///
/// The taxonomy is deliberately narrow: everything here is an in-memory state
/// error returned to the caller. An unmatched hotkey is not an error at all;
/// the key may belong to application-level handling above this core, so
/// dispatch treats it as a silent no-op.
#[derive(Error, Debug)]
pub enum TabOrderError {
    /// Operation invoked on a tab order in the wrong lifecycle phase
    #[error("invalid state in {operation}: {reason}")]
    InvalidState {
        operation: &'static str,
        reason: &'static str,
    },

    /// Hotkey already bound to an earlier region
    ///
    /// First-match lookup would make a later region with the same hotkey
    /// permanently unreachable, so registration rejects the duplicate.
    #[error("hotkey {hotkey} is already bound to region `{bound_to}`")]
    DuplicateHotkey { hotkey: Hotkey, bound_to: String },
}
