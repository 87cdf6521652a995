use crate::adapter::MagnitudeBucket;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub comment: Color,   // Grey
    pub distance: Color,  // Muted text for the "N km of" line
    pub date: Color,
    pub border_focused: Color,
    pub current_line_bg: Color,
    pub magnitude_text: Color, // Text drawn on top of the magnitude circle
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    comment: Color::Rgb(108, 112, 134),
    distance: Color::Rgb(166, 173, 200),
    date: Color::Rgb(148, 226, 213),           // Cyan/teal for dates
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for selected row
    magnitude_text: Color::White,
};

/// Fill colors of the magnitude circle, one per [`MagnitudeBucket`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MagnitudePalette {
    colors: [Color; 10],
}

impl MagnitudePalette {
    pub const fn new(colors: [Color; 10]) -> Self {
        MagnitudePalette { colors }
    }

    pub fn color(&self, bucket: MagnitudeBucket) -> Color {
        self.colors[bucket.index()]
    }
}

pub const MAGNITUDE_PALETTE: MagnitudePalette = MagnitudePalette::new([
    Color::Rgb(0x4A, 0x7B, 0xA7), // 1: blue
    Color::Rgb(0x04, 0xB4, 0xB3), // 2
    Color::Rgb(0x10, 0xCA, 0xC9), // 3: teal
    Color::Rgb(0xF5, 0xA6, 0x23), // 4: amber
    Color::Rgb(0xFF, 0x7D, 0x50), // 5
    Color::Rgb(0xFC, 0x66, 0x44), // 6
    Color::Rgb(0xE7, 0x5F, 0x40), // 7
    Color::Rgb(0xE1, 0x3A, 0x20), // 8
    Color::Rgb(0xD9, 0x32, 0x18), // 9
    Color::Rgb(0xC0, 0x38, 0x23), // 10+: deep red
]);
