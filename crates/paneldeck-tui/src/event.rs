//! Terminal event loop feeding the dashboard

use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self as crossterm_event, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

/// Event types for the dashboard
#[derive(Debug, Clone, Copy)]
pub enum Event {
    /// Keyboard input event
    Key(KeyEvent),
    /// Terminal resize event
    Resize { width: u16, height: u16 },
    /// Tick event for periodic redraw
    ///
    /// Periodic data sources must ride these ticks back onto the UI task
    /// rather than touching widget state from another thread.
    Tick,
}

/// Event loop for terminal events
///
/// A dedicated thread polls crossterm and forwards key-press and resize
/// events over an unbounded channel, emitting a `Tick` at the configured
/// interval. The thread exits when the receiving side is dropped.
pub struct EventLoop {
    rx: UnboundedReceiver<Event>,
}

impl EventLoop {
    /// Start polling terminal events with the given tick interval
    pub fn new(tick_interval: Duration) -> Self {
        let (thread_tx, rx) = unbounded_channel();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_interval.saturating_sub(last_tick.elapsed());
                match crossterm_event::poll(timeout) {
                    Ok(true) => match crossterm_event::read() {
                        Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                            if thread_tx.send(Event::Key(key)).is_err() {
                                break;
                            }
                        }
                        Ok(CrosstermEvent::Resize(width, height)) => {
                            if thread_tx.send(Event::Resize { width, height }).is_err() {
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(e) => {
                            tracing::error!("failed to read terminal event: {e}");
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(e) => {
                        tracing::error!("failed to poll terminal events: {e}");
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_interval {
                    if thread_tx.send(Event::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        EventLoop { rx }
    }

    /// Receive the next event; `None` once the loop has shut down
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}
