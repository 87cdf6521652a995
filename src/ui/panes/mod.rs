//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`list`]: The scrollable earthquake list with magnitude-colored rows
//! - [`status`]: Status bar with keybindings and list position
//!
//! Each pane module exports a primary `render_*()` function; the list pane
//! also owns its scroll state between frames.

pub mod list;
pub mod status;

// Re-export render functions for convenience
pub use list::{render_earthquake_list, visible_rows, ListScrollState};
pub use status::render_status_bar;
