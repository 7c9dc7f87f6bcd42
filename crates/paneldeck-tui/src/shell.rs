//! Dashboard shell: pages of widgets with a bottom panel bar

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use paneldeck_taborder::TabOrder;

use crate::focus::RegistryHandle;
use crate::widgets::PanelHandle;

/// One dashboard page: stacked widgets sharing a tab order
pub struct Page {
    title: String,
    entries: Vec<(PanelHandle, Constraint)>,
    tab_order: TabOrder,
}

impl Page {
    /// Create an empty page around its tab order
    pub fn new(title: impl Into<String>, tab_order: TabOrder) -> Self {
        Page {
            title: title.into(),
            entries: Vec::new(),
            tab_order,
        }
    }

    /// Append a widget with its vertical size constraint
    pub fn add_panel(&mut self, panel: PanelHandle, constraint: Constraint) {
        self.entries.push((panel, constraint));
    }

    /// Page title shown in the bottom panel bar
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The page's navigation controller
    pub fn tab_order(&self) -> &TabOrder {
        &self.tab_order
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let constraints: Vec<Constraint> = self.entries.iter().map(|(_, c)| *c).collect();
        let chunks = Layout::vertical(constraints).split(area);
        for ((panel, _), chunk) in self.entries.iter().zip(chunks.iter()) {
            panel.render(frame, *chunk);
        }
    }
}

/// Multi-page dashboard: page switching, key routing, panel bar
///
/// Ctrl+N / Ctrl+P cycle pages, F-keys jump to a page directly, and `q` or
/// Ctrl+Q quits. Every other key goes to whichever widget owns input focus.
/// Switching pages re-applies that page's current focus, so the highlight
/// lands back where the user left it.
pub struct DashboardShell {
    title: String,
    version: String,
    pages: Vec<Page>,
    current_page: usize,
    registry: RegistryHandle,
}

impl DashboardShell {
    /// Create an empty shell
    pub fn new(title: impl Into<String>, version: impl Into<String>, registry: RegistryHandle) -> Self {
        DashboardShell {
            title: title.into(),
            version: version.into(),
            pages: Vec::new(),
            current_page: 0,
            registry,
        }
    }

    /// Append a page; the first page added is shown initially
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Index of the visible page
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// The shared focus registry
    pub fn registry(&self) -> RegistryHandle {
        self.registry.clone()
    }

    /// Handle a key event; returns `true` when the dashboard should quit
    pub fn handle_key(&mut self, event: KeyEvent) -> bool {
        let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
        match event.code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('n') if ctrl => self.next_page(),
            KeyCode::Char('p') if ctrl => self.previous_page(),
            KeyCode::F(n) => {
                let index = usize::from(n.saturating_sub(1));
                if index < self.pages.len() {
                    self.activate_page(index);
                }
            }
            _ => {
                let focused = self.registry.borrow().focused_panel();
                if let Some(panel) = focused {
                    panel.handle_key(event);
                }
            }
        }
        false
    }

    /// Show the next page, wrapping at the end
    pub fn next_page(&mut self) {
        if !self.pages.is_empty() {
            let next = (self.current_page + 1) % self.pages.len();
            self.activate_page(next);
        }
    }

    /// Show the previous page, wrapping at the start
    pub fn previous_page(&mut self) {
        if !self.pages.is_empty() {
            let len = self.pages.len();
            let previous = (self.current_page + len - 1) % len;
            self.activate_page(previous);
        }
    }

    /// Show the page at `index` if it exists
    ///
    /// Building several pages leaves input with whichever page was wired
    /// last, so callers should jump to their starting page once the shell is
    /// assembled.
    pub fn jump_to_page(&mut self, index: usize) {
        if index < self.pages.len() {
            self.activate_page(index);
        }
    }

    fn activate_page(&mut self, index: usize) {
        self.current_page = index;
        let page = &self.pages[index];
        tracing::debug!(page = %page.title(), index, "switching page");
        page.tab_order().set_current_input_focus();
    }

    /// Render the title bar, the visible page, and the panel bar
    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

        let header = Paragraph::new(format!("{} {}", self.title, self.version))
            .style(Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(header, chunks[0]);

        if let Some(page) = self.pages.get(self.current_page) {
            page.render(frame, chunks[1]);
        }

        frame.render_widget(Paragraph::new(self.panel_bar()), chunks[2]);
    }

    /// Panel selection string: `F1:Name F2:Name ...` with the active page
    /// highlighted
    fn panel_bar(&self) -> Line<'_> {
        let mut spans = Vec::new();
        for (index, page) in self.pages.iter().enumerate() {
            let style = if index == self.current_page {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::REVERSED)
            } else {
                Style::default().fg(Color::Yellow)
            };
            spans.push(Span::styled(format!("F{}:{}", index + 1, page.title()), style));
            if index + 1 < self.pages.len() {
                spans.push(Span::raw(" "));
            }
        }
        Line::from(spans)
    }
}
