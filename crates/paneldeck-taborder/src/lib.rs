//! Focus-order and keyboard-navigation core for multi-panel terminal dashboards
//!
//! This crate decides which of a panel's registered screen regions owns
//! keyboard input and how that focus moves:
//! - a registry of focusable regions in registration order, each with an
//!   optional hotkey
//! - a navigation state machine cycling focus on Tab/Backtab, jumping on
//!   hotkeys, and honoring programmatic focus requests
//! - a two-color highlight policy keeping exactly one region's border in the
//!   highlight color at all times
//!
//! It renders nothing itself and owns no widget lifecycle. Widgets expose the
//! [`FocusView`] capability set; the hosting application exposes a
//! [`FocusDriver`] that moves real input focus. The whole core is
//! single-threaded: all state lives behind `Rc`/`Cell` interior mutability and
//! every transition runs synchronously inside the UI event loop.

pub mod error;
pub mod hotkey;
pub mod region;
pub mod taborder;
pub mod theme;
pub mod view;

// Re-export public types
pub use error::{Result, TabOrderError};
pub use hotkey::Hotkey;
pub use region::Region;
pub use taborder::TabOrder;
pub use theme::FocusTheme;
pub use view::{DoneHandler, DriverHandle, FocusDriver, FocusView, KeyInterceptor, NavDirection, ViewHandle};
