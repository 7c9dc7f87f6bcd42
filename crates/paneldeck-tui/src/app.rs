//! Terminal lifecycle and the main draw/event loop

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::error::TuiResult;
use crate::event::{Event, EventLoop};
use crate::shell::DashboardShell;

/// Owns the terminal, the event loop, and the dashboard shell
pub struct TuiApp {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    shell: DashboardShell,
    events: EventLoop,
}

impl TuiApp {
    /// Put the terminal into raw mode on the alternate screen
    pub fn new(shell: DashboardShell, tick_interval: Duration) -> TuiResult<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(TuiApp {
            terminal,
            shell,
            events: EventLoop::new(tick_interval),
        })
    }

    /// Run until the shell requests quit or the event stream closes
    pub async fn run(&mut self) -> TuiResult<()> {
        self.draw()?;
        loop {
            match self.events.next().await {
                Some(Event::Key(event)) => {
                    if self.shell.handle_key(event) {
                        tracing::info!("quit requested");
                        break;
                    }
                    self.draw()?;
                }
                Some(Event::Tick) | Some(Event::Resize { .. }) => self.draw()?,
                None => break,
            }
        }
        Ok(())
    }

    fn draw(&mut self) -> TuiResult<()> {
        let shell = &self.shell;
        self.terminal.draw(|frame| shell.render(frame))?;
        Ok(())
    }

    fn restore(&mut self) -> TuiResult<()> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            tracing::error!(%err, "failed to restore the terminal");
        }
    }
}
