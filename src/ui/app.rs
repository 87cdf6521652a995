//! Main TUI application state and logic

use crate::adapter::EarthquakeAdapter;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

use super::panes::{self, ListScrollState};

/// The main application state
pub struct App {
    /// Supplies the rows of the list
    pub adapter: EarthquakeAdapter,

    /// Position of the selected earthquake
    pub selected: usize,

    /// List scroll offset and recycled rows
    pub list_scroll: ListScrollState,

    /// Earthquakes visible in the last rendered frame, used for paging
    pub page_size: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app showing the adapter's earthquakes
    pub fn new(adapter: EarthquakeAdapter) -> Self {
        App {
            adapter,
            selected: 0,
            list_scroll: ListScrollState::default(),
            page_size: 1,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Create layout: list on top, status bar at bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        self.page_size = panes::visible_rows(chunks[0]);

        panes::render_earthquake_list(
            frame,
            chunks[0],
            &self.adapter,
            self.selected,
            &mut self.list_scroll,
        );

        let selected = (!self.adapter.is_empty()).then_some(self.selected);
        panes::render_status_bar(
            frame,
            chunks[1],
            &self.status_message,
            selected,
            self.adapter.count(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select(self.selected.saturating_sub(1));
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select(self.selected.saturating_add(1));
            }
            KeyCode::PageUp => {
                self.select(self.selected.saturating_sub(self.page_size));
            }
            KeyCode::PageDown => {
                self.select(self.selected.saturating_add(self.page_size));
            }
            KeyCode::Home => {
                self.select(0);
            }
            KeyCode::End => {
                self.select(usize::MAX);
            }
            KeyCode::Enter => {
                self.show_details();
            }
            _ => {}
        }
    }

    /// Move the selection, clamped to the list
    fn select(&mut self, position: usize) {
        self.selected = position.min(self.adapter.count().saturating_sub(1));
        self.status_message.clear();
    }

    /// Show the detail link of the selected earthquake
    fn show_details(&mut self) {
        self.status_message = match self.adapter.get_item(self.selected) {
            Some(earthquake) => format!("Details: {}", earthquake.url()),
            None => "Nothing selected".to_string(),
        };
    }
}
