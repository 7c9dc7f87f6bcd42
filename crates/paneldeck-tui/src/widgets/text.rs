//! Scrollable text view widget

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use paneldeck_taborder::{DoneHandler, FocusView, KeyInterceptor, NavDirection};

use super::{bordered_block, HookSlots, Panel};

/// Text view region: wrapped lines with Up/Down scrolling
pub struct TextPanel {
    title: String,
    lines: RefCell<Vec<String>>,
    scroll: Cell<u16>,
    border_color: Cell<Color>,
    hooks: HookSlots,
}

impl TextPanel {
    /// Create an empty text panel
    pub fn new(title: impl Into<String>) -> Rc<Self> {
        Rc::new(TextPanel {
            title: title.into(),
            lines: RefCell::new(Vec::new()),
            scroll: Cell::new(0),
            border_color: Cell::new(Color::Reset),
            hooks: HookSlots::default(),
        })
    }

    /// Replace the whole text content
    pub fn set_text(&self, text: impl AsRef<str>) {
        *self.lines.borrow_mut() = text.as_ref().lines().map(str::to_string).collect();
        self.scroll.set(0);
    }

    /// Append one line
    pub fn push_line(&self, line: impl Into<String>) {
        self.lines.borrow_mut().push(line.into());
    }

    /// Current border color
    pub fn border_color(&self) -> Color {
        self.border_color.get()
    }

    /// Current scroll offset
    pub fn scroll_offset(&self) -> u16 {
        self.scroll.get()
    }
}

impl FocusView for TextPanel {
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

impl Panel for TextPanel {
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
            KeyCode::Up => self.scroll.set(self.scroll.get().saturating_sub(1)),
            KeyCode::Down => {
                let max = self.lines.borrow().len().saturating_sub(1) as u16;
                self.scroll.set(self.scroll.get().saturating_add(1).min(max));
            }
            KeyCode::Home => self.scroll.set(0),
            _ => {}
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .lines
            .borrow()
            .iter()
            .map(|l| Line::from(l.clone()))
            .collect();
        let paragraph = Paragraph::new(lines)
            .block(bordered_block(&self.title, self.border_color.get()))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll.get(), 0));
        frame.render_widget(paragraph, area);
    }
}
