//! Terminal dashboard shell and widgets for paneldeck
//!
//! Builds the UI side of a paneldeck dashboard on ratatui + crossterm:
//! - widgets implementing the navigation core's [`FocusView`] capability set
//!   (text view, table, form), one per region
//! - a [`FocusRegistry`] that plays the external focus driver and routes key
//!   events to whichever widget owns input
//! - a [`DashboardShell`] arranging widgets into pages with a bottom panel
//!   bar, page cycling, and per-page tab orders
//! - a terminal lifecycle wrapper and event loop feeding the shell
//!
//! [`FocusView`]: paneldeck_taborder::FocusView

pub mod app;
pub mod error;
pub mod event;
pub mod focus;
pub mod shell;
pub mod widgets;

// Re-export public types
pub use app::TuiApp;
pub use error::{TuiError, TuiResult};
pub use event::{Event, EventLoop};
pub use focus::{register_panel, FocusRegistry, RegistryHandle};
pub use shell::{DashboardShell, Page};
pub use widgets::{FormPanel, Panel, PanelHandle, TablePanel, TextPanel};
