//! Dashboard widgets implementing the focus capability set
//!
//! One widget kind per original region variant: text view, table, and form.
//! Every widget keeps its border color and input hooks behind interior
//! mutability so the navigation core may repaint it from inside its own
//! callbacks on the single UI thread.

pub mod form;
pub mod table;
pub mod text;

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use paneldeck_taborder::{DoneHandler, KeyInterceptor, NavDirection};

pub use form::FormPanel;
pub use table::TablePanel;
pub use text::TextPanel;

/// Shared handle to a rendered, key-handling dashboard widget
pub type PanelHandle = Rc<dyn Panel>;

/// A dashboard widget: renders into an area and consumes key events
pub trait Panel {
    /// Widget title shown on its border
    fn title(&self) -> &str;

    /// Deliver a key event: interceptor first, then Tab/Backtab through the
    /// done hook, then widget-specific handling
    fn handle_key(&self, event: KeyEvent);

    /// Render the widget into the given area
    fn render(&self, frame: &mut Frame, area: Rect);
}

/// Bordered block shared by all widget kinds
pub(crate) fn bordered_block(title: &str, border_color: Color) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_color))
}

/// Storage for the wiring hooks installed on a widget
///
/// Hooks are taken out of their slot for the duration of a call so a hook may
/// reconfigure its own widget without a double borrow; a replacement
/// installed from inside the hook wins over restoring the old one.
#[derive(Default)]
pub(crate) struct HookSlots {
    interceptor: RefCell<Option<KeyInterceptor>>,
    done: RefCell<Option<DoneHandler>>,
}

impl HookSlots {
    pub(crate) fn set_interceptor(&self, interceptor: KeyInterceptor) {
        *self.interceptor.borrow_mut() = Some(interceptor);
    }

    pub(crate) fn set_done(&self, handler: DoneHandler) {
        *self.done.borrow_mut() = Some(handler);
    }

    /// Run the key interceptor; `None` means the key was swallowed
    pub(crate) fn intercept(&self, event: KeyEvent) -> Option<KeyEvent> {
        let taken = self.interceptor.borrow_mut().take();
        let Some(mut hook) = taken else {
            return Some(event);
        };
        let result = hook(event);
        let mut slot = self.interceptor.borrow_mut();
        if slot.is_none() {
            *slot = Some(hook);
        }
        result
    }

    /// Fire the done hook, if one is installed
    pub(crate) fn finish(&self, direction: NavDirection) {
        let taken = self.done.borrow_mut().take();
        let Some(mut hook) = taken else {
            return;
        };
        hook(direction);
        let mut slot = self.done.borrow_mut();
        if slot.is_none() {
            *slot = Some(hook);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn intercept_without_hook_passes_event_through() {
        let slots = HookSlots::default();
        let event = key(KeyCode::Char('x'));
        assert_eq!(slots.intercept(event), Some(event));
    }

    #[test]
    fn intercept_restores_hook_after_running() {
        let slots = HookSlots::default();
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        slots.set_interceptor(Box::new(move |event| {
            counter.set(counter.get() + 1);
            Some(event)
        }));

        slots.intercept(key(KeyCode::Char('a')));
        slots.intercept(key(KeyCode::Char('b')));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn hook_replacing_itself_wins_over_restore() {
        let slots = HookSlots::default();
        // Cannot install from inside the hook without a handle to the slots,
        // so emulate the shape: take, replace while taken, restore declines.
        let taken = slots.interceptor.borrow_mut().take();
        assert!(taken.is_none());
        slots.set_interceptor(Box::new(|_| None));
        assert_eq!(slots.intercept(key(KeyCode::Char('z'))), None);
    }

    #[test]
    fn finish_runs_installed_done_hook() {
        let slots = HookSlots::default();
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        slots.set_done(Box::new(move |direction| {
            assert_eq!(direction, NavDirection::Forward);
            flag.set(true);
        }));

        slots.finish(NavDirection::Forward);
        assert!(fired.get());
        // Hook is restored and can fire again.
        slots.finish(NavDirection::Forward);
    }
}
