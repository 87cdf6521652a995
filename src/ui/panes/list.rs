//! Earthquake list pane rendering
//!
//! Each earthquake takes two terminal lines:
//!
//! ```text
//!  6.8   80 KM N OF                    Mar 16, 1985
//!        San Francisco, CA                 12:00 AM
//! ```
//!
//! The magnitude cell is filled with the row's severity color. Only the
//! visible rows are bound; their containers go back into
//! [`ListScrollState::recycled`] for the next frame.

use crate::adapter::{EarthquakeAdapter, ListItemView};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Terminal lines per earthquake
const ROW_HEIGHT: usize = 2;

/// Width of the magnitude cell, e.g. " 10.2 "
const MAGNITUDE_CELL_WIDTH: usize = 6;

/// Scroll position and row containers kept between frames
#[derive(Debug, Default)]
pub struct ListScrollState {
    /// Position of the first visible earthquake
    pub offset: usize,
    /// Row containers available for reuse
    pub recycled: Vec<ListItemView>,
}

impl ListScrollState {
    /// Adjust `offset` so `selected` is on screen.
    pub fn scroll_to(&mut self, selected: usize, total_rows: usize, visible_rows: usize) {
        let visible_rows = visible_rows.max(1);
        if selected < self.offset {
            self.offset = selected;
        } else if selected >= self.offset + visible_rows {
            self.offset = selected + 1 - visible_rows;
        }
        self.offset = self.offset.min(total_rows.saturating_sub(visible_rows));
    }
}

/// Number of earthquakes that fit into a pane of `area`
pub fn visible_rows(area: Rect) -> usize {
    (area.height.saturating_sub(2) as usize / ROW_HEIGHT).max(1) // Account for borders
}

/// Render the earthquake list
pub fn render_earthquake_list(
    frame: &mut Frame,
    area: Rect,
    adapter: &EarthquakeAdapter,
    selected: usize,
    scroll: &mut ListScrollState,
) {
    let block = Block::default()
        .title(format!(" Earthquakes ({}) ", adapter.count()))
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    if adapter.is_empty() {
        let paragraph = Paragraph::new("(no earthquakes)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 1, 0, 0));
    let inner_width = area.width.saturating_sub(4) as usize; // Borders and padding

    let visible = visible_rows(area);
    scroll.scroll_to(selected, adapter.count(), visible);

    let mut items = Vec::with_capacity(visible);
    for position in scroll.offset..(scroll.offset + visible).min(adapter.count()) {
        let Some(view) = adapter.get_view(position, scroll.recycled.pop()) else {
            break;
        };

        let mut item = ListItem::new(row_text(&view, inner_width));
        if position == selected {
            item = item.style(Style::default().bg(DEFAULT_THEME.current_line_bg));
        }
        items.push(item);
        scroll.recycled.push(view);
    }

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

/// Lay out one bound row across two lines of `width` columns.
fn row_text(view: &ListItemView, width: usize) -> Text<'static> {
    let magnitude = Span::styled(
        format!("{:^width$}", view.magnitude, width = MAGNITUDE_CELL_WIDTH),
        Style::default()
            .bg(view.magnitude_color)
            .fg(DEFAULT_THEME.magnitude_text)
            .add_modifier(Modifier::BOLD),
    );
    let indent = " ".repeat(MAGNITUDE_CELL_WIDTH);

    let first = spread(
        vec![
            magnitude,
            Span::raw("  "),
            Span::styled(
                view.distance.to_uppercase(),
                Style::default().fg(DEFAULT_THEME.distance),
            ),
        ],
        Span::styled(view.date.clone(), Style::default().fg(DEFAULT_THEME.date)),
        width,
    );
    let second = spread(
        vec![
            Span::raw(indent),
            Span::raw("  "),
            Span::styled(view.location.clone(), Style::default().fg(DEFAULT_THEME.fg)),
        ],
        Span::styled(view.time.clone(), Style::default().fg(DEFAULT_THEME.comment)),
        width,
    );

    Text::from(vec![first, second])
}

/// Left-aligned spans followed by `right` flush against the right edge.
fn spread(mut left: Vec<Span<'static>>, right: Span<'static>, width: usize) -> Line<'static> {
    let used: usize = left.iter().map(Span::width).sum::<usize>() + right.width();
    // Keep at least one space between the two sides
    let gap = width.saturating_sub(used).max(1);
    left.push(Span::raw(" ".repeat(gap)));
    left.push(right);
    Line::from(left)
}
