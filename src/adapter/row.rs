//! Row container filled by the adapter

use ratatui::style::Color;

/// One list row: five text fields and the fill color of the magnitude circle.
///
/// Containers are recycled between positions; binding overwrites every field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListItemView {
    pub magnitude: String,
    pub magnitude_color: Color,
    pub location: String,
    pub distance: String,
    pub date: String,
    pub time: String,
}

impl ListItemView {
    pub fn new() -> Self {
        Self::default()
    }
}
