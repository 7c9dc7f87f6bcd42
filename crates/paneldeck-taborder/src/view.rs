//! Capability traits at the seam between the navigation core and the UI

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::KeyEvent;
use ratatui::style::Color;

/// Shared handle to a focusable view
///
/// The core never owns a widget's lifecycle; it only holds handles for
/// dispatch. Handles are `Rc` because the whole core runs on the single UI
/// thread.
pub type ViewHandle = Rc<dyn FocusView>;

/// Shared handle to the external focus-setting capability
pub type DriverHandle = Rc<RefCell<dyn FocusDriver>>;

/// Key hook installed on a view during wiring
///
/// Returns `Some(event)` to let the view keep processing the key, `None` to
/// swallow it.
pub type KeyInterceptor = Box<dyn FnMut(KeyEvent) -> Option<KeyEvent>>;

/// Hook a view invokes when it consumes a Tab or Backtab
pub type DoneHandler = Box<dyn FnMut(NavDirection)>;

/// Cycling direction reported by a view's done hook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    /// Tab: advance to the next region in registration order
    Forward,
    /// Backtab: retreat to the previous region
    Backward,
}

/// Capability set every focusable region's view must expose
///
/// One trait covers every widget kind (text view, table, form, ...). Methods
/// take `&self` and rely on interior mutability: a transition may repaint the
/// very view whose interceptor is currently running (idempotent re-focus), so
/// no view may be mutably borrowed across a hook invocation.
pub trait FocusView {
    /// Notification that input focus moved to this view
    fn request_focus(&self);

    /// Set the view's border color (the two-state highlight)
    fn set_border_color(&self, color: Color);

    /// Install the key hook; replaces any previous interceptor
    fn set_key_interceptor(&self, interceptor: KeyInterceptor);

    /// Install the Tab/Backtab done hook; replaces any previous handler
    ///
    /// Widget kinds that consume Tab themselves (forms cycling their own
    /// fields) keep this default no-op.
    fn set_done_handler(&self, handler: DoneHandler) {
        drop(handler);
    }
}

/// External capability that moves real input focus between views
///
/// Implemented by the hosting application (an event router tracking which
/// view receives key events). A driver must not call back into the tab order
/// it serves; transitions are already in progress when it runs.
pub trait FocusDriver {
    /// Move input focus to the given view
    fn set_focus(&mut self, view: &ViewHandle);
}
