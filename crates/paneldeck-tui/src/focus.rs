//! Focus routing between the navigation core and dashboard widgets

use std::cell::RefCell;
use std::rc::Rc;

use paneldeck_taborder::{FocusDriver, FocusView, ViewHandle};

use crate::widgets::{Panel, PanelHandle};

/// Shared handle to the focus registry
pub type RegistryHandle = Rc<RefCell<FocusRegistry>>;

/// The application's focus-setting capability
///
/// Tracks which registered widget owns input so the shell can route key
/// events to it. Plays the role a windowing toolkit's `SetFocus` plays for
/// retained-mode UIs.
#[derive(Default)]
pub struct FocusRegistry {
    entries: Vec<(ViewHandle, PanelHandle)>,
    focused: Option<usize>,
}

impl FocusRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        FocusRegistry::default()
    }

    /// Register a widget under both of its capability handles
    pub fn register(&mut self, view: ViewHandle, panel: PanelHandle) {
        self.entries.push((view, panel));
    }

    /// The widget currently owning input, if any
    pub fn focused_panel(&self) -> Option<PanelHandle> {
        self.focused
            .and_then(|index| self.entries.get(index))
            .map(|(_, panel)| panel.clone())
    }

    /// Whether the given view owns input
    pub fn is_focused(&self, view: &ViewHandle) -> bool {
        self.focused
            .and_then(|index| self.entries.get(index))
            .is_some_and(|(registered, _)| same_view(registered, view))
    }

    fn position(&self, view: &ViewHandle) -> Option<usize> {
        self.entries
            .iter()
            .position(|(registered, _)| same_view(registered, view))
    }
}

impl FocusDriver for FocusRegistry {
    fn set_focus(&mut self, view: &ViewHandle) {
        view.request_focus();
        self.focused = self.position(view);
        if self.focused.is_none() {
            tracing::warn!("focus moved to a view that was never registered");
        }
    }
}

/// Compare data addresses only; vtable pointers may differ between coercion
/// sites for the same widget.
fn same_view(a: &ViewHandle, b: &ViewHandle) -> bool {
    std::ptr::eq(
        Rc::as_ptr(a) as *const u8,
        Rc::as_ptr(b) as *const u8,
    )
}

/// Register a widget that exposes both the panel and focus capability sets
pub fn register_panel<W>(registry: &RegistryHandle, widget: &Rc<W>)
where
    W: Panel + FocusView + 'static,
{
    registry
        .borrow_mut()
        .register(widget.clone() as ViewHandle, widget.clone() as PanelHandle);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::TextPanel;

    #[test]
    fn set_focus_resolves_the_registered_panel() {
        let registry: RegistryHandle = Rc::new(RefCell::new(FocusRegistry::new()));
        let first = TextPanel::new("first");
        let second = TextPanel::new("second");
        register_panel(&registry, &first);
        register_panel(&registry, &second);

        registry
            .borrow_mut()
            .set_focus(&(second.clone() as ViewHandle));
        let focused = registry.borrow().focused_panel().unwrap();
        assert_eq!(focused.title(), "second");
        assert!(registry.borrow().is_focused(&(second as ViewHandle)));
        assert!(!registry.borrow().is_focused(&(first as ViewHandle)));
    }

    #[test]
    fn unregistered_view_clears_focus() {
        let registry: RegistryHandle = Rc::new(RefCell::new(FocusRegistry::new()));
        let known = TextPanel::new("known");
        register_panel(&registry, &known);
        registry
            .borrow_mut()
            .set_focus(&(known.clone() as ViewHandle));
        assert!(registry.borrow().focused_panel().is_some());

        let stranger = TextPanel::new("stranger");
        registry
            .borrow_mut()
            .set_focus(&(stranger as ViewHandle));
        assert!(registry.borrow().focused_panel().is_none());
    }
}
