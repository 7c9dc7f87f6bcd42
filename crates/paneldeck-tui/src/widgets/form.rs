//! Form region widget

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use paneldeck_taborder::{FocusView, KeyInterceptor};

use super::{bordered_block, HookSlots, Panel};

struct FormField {
    label: String,
    value: RefCell<String>,
}

/// Form region: labeled text fields, Tab cycling between them
///
/// Forms consume Tab/Backtab for their own field navigation, so this widget
/// keeps the capability set's no-op done hook: Tab never leaves a form, which
/// is exactly how the equivalent form windows behaved in terminal dashboards
/// built on completion-handler wiring.
pub struct FormPanel {
    title: String,
    fields: Vec<FormField>,
    active: Cell<usize>,
    border_color: Cell<Color>,
    hooks: HookSlots,
}

impl FormPanel {
    /// Create a form with one empty field per label
    pub fn new(title: impl Into<String>, labels: Vec<String>) -> Rc<Self> {
        Rc::new(FormPanel {
            title: title.into(),
            fields: labels
                .into_iter()
                .map(|label| FormField {
                    label,
                    value: RefCell::new(String::new()),
                })
                .collect(),
            active: Cell::new(0),
            border_color: Cell::new(Color::Reset),
            hooks: HookSlots::default(),
        })
    }

    /// Value of the named field
    pub fn value(&self, label: &str) -> Option<String> {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.borrow().clone())
    }

    /// Index of the active field
    pub fn active_field(&self) -> usize {
        self.active.get()
    }

    /// Current border color
    pub fn border_color(&self) -> Color {
        self.border_color.get()
    }

    fn cycle_field(&self, forward: bool) {
        let len = self.fields.len();
        if len == 0 {
            return;
        }
        let current = self.active.get();
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        self.active.set(next);
    }
}

impl FocusView for FormPanel {
    fn request_focus(&self) {}

    fn set_border_color(&self, color: Color) {
        self.border_color.set(color);
    }

    fn set_key_interceptor(&self, interceptor: KeyInterceptor) {
        self.hooks.set_interceptor(interceptor);
    }

    // set_done_handler keeps the trait's no-op default: Tab stays inside the
    // form.
}

impl Panel for FormPanel {
    fn title(&self) -> &str {
        &self.title
    }

    fn handle_key(&self, event: KeyEvent) {
        let Some(event) = self.hooks.intercept(event) else {
            return;
        };
        match event.code {
            KeyCode::Tab | KeyCode::Down => self.cycle_field(true),
            KeyCode::BackTab | KeyCode::Up => self.cycle_field(false),
            KeyCode::Char(c) => {
                if let Some(field) = self.fields.get(self.active.get()) {
                    field.value.borrow_mut().push(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.fields.get(self.active.get()) {
                    field.value.borrow_mut().pop();
                }
            }
            _ => {}
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .fields
            .iter()
            .enumerate()
            .map(|(index, field)| {
                let style = if index == self.active.get() {
                    Style::default().add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                };
                Line::from(vec![
                    Span::raw(format!("{}: ", field.label)),
                    Span::styled(field.value.borrow().clone(), style),
                ])
            })
            .collect();
        let paragraph =
            Paragraph::new(lines).block(bordered_block(&self.title, self.border_color.get()));
        frame.render_widget(paragraph, area);
    }
}
