//! Tabular region widget

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Row, Table, TableState};
use ratatui::Frame;

use paneldeck_taborder::{DoneHandler, FocusView, KeyInterceptor, NavDirection};

use super::{bordered_block, HookSlots, Panel};

/// Table region: fixed headers, selectable rows
pub struct TablePanel {
    title: String,
    headers: Vec<String>,
    rows: RefCell<Vec<Vec<String>>>,
    state: RefCell<TableState>,
    border_color: Cell<Color>,
    hooks: HookSlots,
}

impl TablePanel {
    /// Create a table panel with the given column headers
    pub fn new(title: impl Into<String>, headers: Vec<String>) -> Rc<Self> {
        Rc::new(TablePanel {
            title: title.into(),
            headers,
            rows: RefCell::new(Vec::new()),
            state: RefCell::new(TableState::default()),
            border_color: Cell::new(Color::Reset),
            hooks: HookSlots::default(),
        })
    }

    /// Replace the table contents
    pub fn set_rows(&self, rows: Vec<Vec<String>>) {
        let select = if rows.is_empty() { None } else { Some(0) };
        *self.rows.borrow_mut() = rows;
        self.state.borrow_mut().select(select);
    }

    /// Index of the selected row, if any
    pub fn selected(&self) -> Option<usize> {
        self.state.borrow().selected()
    }

    /// Current border color
    pub fn border_color(&self) -> Color {
        self.border_color.get()
    }

    fn move_selection(&self, delta: isize) {
        let len = self.rows.borrow().len();
        if len == 0 {
            return;
        }
        let current = self.state.borrow().selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1) as usize;
        self.state.borrow_mut().select(Some(next));
    }
}

impl FocusView for TablePanel {
    fn request_focus(&self) {}

    fn set_border_color(&self, color: Color) {
        self.border_color.set(color);
    }

    fn set_key_interceptor(&self, interceptor: KeyInterceptor) {
        self.hooks.set_interceptor(interceptor);
    }

    fn set_done_handler(&self, handler: DoneHandler) {
        self.hooks.set_done(handler);
    }
}

impl Panel for TablePanel {
    fn title(&self) -> &str {
        &self.title
    }

    fn handle_key(&self, event: KeyEvent) {
        let Some(event) = self.hooks.intercept(event) else {
            return;
        };
        match event.code {
            KeyCode::Tab => self.hooks.finish(NavDirection::Forward),
            KeyCode::BackTab => self.hooks.finish(NavDirection::Backward),
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            _ => {}
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let rows = self.rows.borrow();
        let widths = vec![Constraint::Fill(1); self.headers.len().max(1)];
        let table = Table::new(
            rows.iter().map(|cells| Row::new(cells.clone())),
            widths,
        )
        .header(
            Row::new(self.headers.clone()).style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .block(bordered_block(&self.title, self.border_color.get()));
        frame.render_stateful_widget(table, area, &mut self.state.borrow_mut());
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn sample() -> Rc<TablePanel> {
        let panel = TablePanel::new("Ports", vec!["Port".into(), "State".into()]);
        panel.set_rows(vec![
            vec!["0".into(), "up".into()],
            vec!["1".into(), "down".into()],
            vec!["2".into(), "up".into()],
        ]);
        panel
    }

    #[test]
    fn set_rows_selects_first_row() {
        let panel = sample();
        assert_eq!(panel.selected(), Some(0));

        panel.set_rows(Vec::new());
        assert_eq!(panel.selected(), None);
    }

    #[test]
    fn selection_moves_and_clamps() {
        let panel = sample();
        panel.handle_key(key(KeyCode::Down));
        panel.handle_key(key(KeyCode::Down));
        panel.handle_key(key(KeyCode::Down));
        assert_eq!(panel.selected(), Some(2));

        panel.handle_key(key(KeyCode::Up));
        assert_eq!(panel.selected(), Some(1));
    }

    #[test]
    fn selection_on_empty_table_is_noop() {
        let panel = TablePanel::new("Empty", vec!["Col".into()]);
        panel.handle_key(key(KeyCode::Down));
        assert_eq!(panel.selected(), None);
    }
}
