//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, row selection
//! - **[`panes`]**: stateless render functions for the earthquake list and
//!   the status bar
//! - **[`theme`]**: chrome colors and the magnitude palette
//!
//! The entry point for consumers is [`App`]: construct it with an
//! [`EarthquakeAdapter`] and call [`App::run`] to start the event loop.
//!
//! [`EarthquakeAdapter`]: crate::adapter::EarthquakeAdapter
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
