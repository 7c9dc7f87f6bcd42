//! Tab-order registry and navigation state machine

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crossterm::event::{KeyCode, KeyEvent};

use crate::error::{Result, TabOrderError};
use crate::hotkey::Hotkey;
use crate::region::Region;
use crate::theme::FocusTheme;
use crate::view::{DriverHandle, NavDirection, ViewHandle};

/// Ordered group of focusable regions for one panel
///
/// A `TabOrder` is created once at panel-setup time, filled with regions
/// during setup, then wired into the views' input hooks with
/// [`finalize_wiring`](TabOrder::finalize_wiring). From then on it is a
/// steady-state navigation controller: Tab/Backtab cycle focus through the
/// regions in registration order, hotkeys jump focus directly, and exactly one
/// region's border carries the theme's highlight color at any time.
///
/// The struct itself is a cheap cloneable handle; clones share state so the
/// wiring closures and panel code can both drive the same controller.
#[derive(Clone)]
pub struct TabOrder {
    inner: Rc<RefCell<TabOrderInner>>,
}

struct TabOrderInner {
    name: String,
    regions: Vec<Region>,
    current: usize,
    previous: usize,
    driver: DriverHandle,
    theme: FocusTheme,
}

impl TabOrder {
    /// Create an empty tab order for the named panel
    ///
    /// `driver` is the external focus-setting capability of the hosting
    /// application; `theme` supplies the shared border colors.
    pub fn new(name: impl Into<String>, driver: DriverHandle, theme: FocusTheme) -> Self {
        let name = name.into();
        tracing::debug!(panel = %name, "creating tab order");
        TabOrder {
            inner: Rc::new(RefCell::new(TabOrderInner {
                name,
                regions: Vec::new(),
                current: 0,
                previous: 0,
                driver,
                theme,
            })),
        }
    }

    /// Panel label of this group
    pub fn name(&self) -> String {
        self.inner.borrow().name.clone()
    }

    /// Number of registered regions
    pub fn len(&self) -> usize {
        self.inner.borrow().regions.len()
    }

    /// Whether no regions have been registered yet
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().regions.is_empty()
    }

    /// Index of the currently focused region
    pub fn current_index(&self) -> usize {
        self.inner.borrow().current
    }

    /// Index of the region focused immediately before the current one
    pub fn previous_index(&self) -> usize {
        self.inner.borrow().previous
    }

    /// The shared border-color theme
    pub fn theme(&self) -> FocusTheme {
        self.inner.borrow().theme.clone()
    }

    /// Set the unfocused border color on the shared theme
    pub fn set_default_color(&self, color: ratatui::style::Color) {
        self.inner.borrow().theme.set_default_color(color);
    }

    /// Set the focused border color on the shared theme
    pub fn set_highlight_color(&self, color: ratatui::style::Color) {
        self.inner.borrow().theme.set_highlight_color(color);
    }

    /// Register a focusable region
    ///
    /// Appends the region at the end of the cycling order. The first region
    /// registered becomes the default focus and is painted with the highlight
    /// border; every later region starts with the default border. A hotkey
    /// already bound to an earlier region is rejected: first-match lookup
    /// would make the new region unreachable through it.
    pub fn add(
        &self,
        name: impl Into<String>,
        view: ViewHandle,
        hotkey: Option<Hotkey>,
    ) -> Result<Region> {
        let mut inner = self.inner.borrow_mut();
        if let Some(key) = hotkey {
            if let Some(existing) = inner.regions.iter().find(|r| r.hotkey() == Some(key)) {
                return Err(TabOrderError::DuplicateHotkey {
                    hotkey: key,
                    bound_to: existing.name().to_string(),
                });
            }
        }

        let index = inner.regions.len();
        let region = Region::new(index, name.into(), hotkey, view);
        if index == 0 {
            region.view().set_border_color(inner.theme.highlight_color());
        } else {
            region.view().set_border_color(inner.theme.default_color());
        }
        tracing::debug!(
            panel = %inner.name,
            region = %region.name(),
            index,
            hotkey = ?hotkey,
            "registered region"
        );
        inner.regions.push(region.clone());
        Ok(region)
    }

    /// Find the first region (in registration order) bound to the hotkey
    pub fn find_by_hotkey(&self, hotkey: Hotkey) -> Option<Region> {
        self.inner
            .borrow()
            .regions
            .iter()
            .find(|r| r.hotkey() == Some(hotkey))
            .cloned()
    }

    /// Move focus to the region bound to the hotkey
    ///
    /// An unmatched hotkey leaves focus untouched: the key may belong to
    /// application-level handling above this core.
    pub fn set_input_focus(&self, hotkey: Hotkey) {
        let target = self.find_by_hotkey(hotkey);
        match target {
            Some(target) => self.inner.borrow_mut().transition(&target),
            None => {
                tracing::trace!(hotkey = %hotkey, "no region bound to hotkey, ignoring");
            }
        }
    }

    /// Re-apply focus to the current region without changing state
    ///
    /// Used to restore focus after something else owned input, e.g. a modal
    /// dialog or a page switch. A no-op while no regions exist.
    pub fn set_current_input_focus(&self) {
        let target = {
            let inner = self.inner.borrow();
            match inner.regions.get(inner.current) {
                Some(region) => region.clone(),
                None => return,
            }
        };
        self.inner.borrow_mut().transition(&target);
    }

    /// Cycle focus forward to the next region in registration order
    pub fn focus_next(&self) {
        self.cycle(NavDirection::Forward);
    }

    /// Cycle focus backward to the previous region in registration order
    pub fn focus_previous(&self) {
        self.cycle(NavDirection::Backward);
    }

    fn cycle(&self, direction: NavDirection) {
        let target = self.inner.borrow().cycle_target(direction);
        if let Some(target) = target {
            self.inner.borrow_mut().transition(&target);
        }
    }

    /// Wire the controller into every registered view's input hooks
    ///
    /// Installs a key interceptor forwarding non-Tab/Backtab keys to hotkey
    /// dispatch, and a done hook performing the cyclic transition when the
    /// view consumes a Tab or Backtab. Views that do not support a done hook
    /// keep their no-op default.
    ///
    /// Fails with [`TabOrderError::InvalidState`] if no regions have been
    /// registered. The installed closures hold weak handles, so dropping the
    /// panel drops the controller even though views outlive the wiring call.
    pub fn finalize_wiring(&self) -> Result<()> {
        let inner = self.inner.borrow();
        if inner.regions.is_empty() {
            return Err(TabOrderError::InvalidState {
                operation: "finalize_wiring",
                reason: "no regions registered",
            });
        }

        for region in &inner.regions {
            let weak = Rc::downgrade(&self.inner);
            region.view().set_key_interceptor(Box::new(move |event| {
                intercept_with(&weak, event)
            }));

            let weak = Rc::downgrade(&self.inner);
            region.view().set_done_handler(Box::new(move |direction| {
                cycle_with(&weak, direction);
            }));
        }
        tracing::debug!(panel = %inner.name, regions = inner.regions.len(), "wiring finalized");
        Ok(())
    }
}

fn intercept_with(weak: &Weak<RefCell<TabOrderInner>>, event: KeyEvent) -> Option<KeyEvent> {
    let Some(inner) = weak.upgrade() else {
        return Some(event);
    };
    if event.code != KeyCode::Tab && event.code != KeyCode::BackTab {
        let target = {
            let inner = inner.borrow();
            inner
                .regions
                .iter()
                .find(|r| r.hotkey().is_some_and(|h| h.matches(&event)))
                .cloned()
        };
        if let Some(target) = target {
            inner.borrow_mut().transition(&target);
        }
    }
    Some(event)
}

fn cycle_with(weak: &Weak<RefCell<TabOrderInner>>, direction: NavDirection) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    let target = inner.borrow().cycle_target(direction);
    if let Some(target) = target {
        inner.borrow_mut().transition(&target);
    }
}

impl TabOrderInner {
    fn cycle_target(&self, direction: NavDirection) -> Option<Region> {
        let len = self.regions.len();
        if len == 0 {
            return None;
        }
        let next = match direction {
            NavDirection::Forward => (self.current + 1) % len,
            NavDirection::Backward => (self.current + len - 1) % len,
        };
        Some(self.regions[next].clone())
    }

    /// Move focus to `target`, repainting borders along the way
    ///
    /// Runs unconditionally, even when `target` is already current, so the
    /// single-highlight invariant never lapses: unhighlight the current
    /// region, move real input focus through the driver, highlight the
    /// target, then record the index change.
    fn transition(&mut self, target: &Region) {
        if let Some(current) = self.regions.get(self.current) {
            current.view().set_border_color(self.theme.default_color());
        }
        self.driver.borrow_mut().set_focus(target.view_handle());
        target.view().set_border_color(self.theme.highlight_color());

        self.previous = self.current;
        self.current = target.index();
        tracing::trace!(
            panel = %self.name,
            current = self.current,
            previous = self.previous,
            region = %target.name(),
            "focus transition"
        );
    }
}
