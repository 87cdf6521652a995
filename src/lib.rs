//! # Introduction
//!
//! QuakeReport lists earthquakes in a terminal, one two-line row per event,
//! with the magnitude drawn on a cell colored by severity. The list is built
//! with [ratatui](https://docs.rs/ratatui).
//!
//! ## Rendering pipeline
//!
//! ```text
//! Vec<Earthquake> → EarthquakeAdapter → ListItemView → list pane → TUI
//! ```
//!
//! 1. [`earthquake`]: the immutable [`earthquake::Earthquake`] record and the
//!    built-in sample list.
//! 2. [`adapter`]: location splitting, magnitude text and buckets, date and
//!    time text; [`adapter::EarthquakeAdapter`] binds a record into a
//!    recyclable [`adapter::ListItemView`].
//! 3. [`config`]: command line options resolved into a
//!    [`config::DisplayConfig`] (palette, locale, time zone).
//! 4. [`ui`]: ratatui-based TUI; not part of the stable library API.

pub mod adapter;
pub mod config;
pub mod earthquake;
pub mod ui;
