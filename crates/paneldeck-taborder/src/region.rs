//! A single focusable region inside a tab order

use std::fmt;

use crate::hotkey::Hotkey;
use crate::view::{FocusView, ViewHandle};

/// One focusable unit of a panel
///
/// Carries its position in registration order (which is also the cycling
/// order), a human-readable name, an optional hotkey, and a handle to the
/// view it dispatches to. Regions are append-only: once assigned, `index`
/// never changes and regions are never removed for the life of the panel.
#[derive(Clone)]
pub struct Region {
    index: usize,
    name: String,
    hotkey: Option<Hotkey>,
    view: ViewHandle,
}

impl Region {
    pub(crate) fn new(index: usize, name: String, hotkey: Option<Hotkey>, view: ViewHandle) -> Self {
        Region {
            index,
            name,
            hotkey,
            view,
        }
    }

    /// Position in registration order, 0-based
    pub fn index(&self) -> usize {
        self.index
    }

    /// Human-readable identifier, unique by convention
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Hotkey bound at registration, if any
    pub fn hotkey(&self) -> Option<Hotkey> {
        self.hotkey
    }

    /// The view this region dispatches to
    pub fn view(&self) -> &dyn FocusView {
        self.view.as_ref()
    }

    /// Shared handle to the view, for focus-driver calls
    pub fn view_handle(&self) -> &ViewHandle {
        &self.view
    }
}

impl fmt::Debug for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Region")
            .field("index", &self.index)
            .field("name", &self.name)
            .field("hotkey", &self.hotkey)
            .finish_non_exhaustive()
    }
}
