// Render tests for the terminal UI

use chrono::{FixedOffset, Locale};
use quakereport::adapter::{DisplayZone, EarthquakeAdapter, MagnitudeBucket};
use quakereport::config::DisplayConfig;
use quakereport::earthquake::{sample_earthquakes, Earthquake};
use quakereport::ui::theme::MAGNITUDE_PALETTE;
use quakereport::ui::App;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

fn utc_app(earthquakes: Vec<Earthquake>) -> App {
    let config = DisplayConfig {
        palette: MAGNITUDE_PALETTE,
        locale: Locale::en_US,
        time_zone: DisplayZone::Fixed(FixedOffset::east_opt(0).unwrap()),
    };
    App::new(EarthquakeAdapter::new(earthquakes, config))
}

fn draw(app: &mut App, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    terminal.draw(|f| app.render(f)).expect("draw");
    terminal.backend().buffer().clone()
}

fn screen_text(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_row_shows_split_location_and_date() {
    let mut app = utc_app(vec![Earthquake::new(
        6.754,
        "80 Km N of San Francisco, CA",
        479_779_200_000,
        "http://x",
    )]);

    let text = screen_text(&draw(&mut app, 60, 8));

    assert!(text.contains("6.8"), "{}", text);
    assert!(text.contains("80 KM N OF"), "{}", text);
    assert!(text.contains("San Francisco, CA"), "{}", text);
    assert!(text.contains("Mar 16, 1985"), "{}", text);
    assert!(text.contains("12:00 AM"), "{}", text);
    assert!(text.contains("1/1"), "{}", text);
}

#[test]
fn test_magnitude_cell_uses_bucket_color() {
    let mut app = utc_app(vec![Earthquake::new(8.3, "48km W of Illapel, Chile", 0, "u")]);

    let buffer = draw(&mut app, 60, 8);
    let expected = MAGNITUDE_PALETTE.color(MagnitudeBucket::Eight);

    let colored = buffer
        .content()
        .iter()
        .filter(|cell| cell.symbol() == "8")
        .any(|cell| cell.bg == expected);
    assert!(colored);
}

#[test]
fn test_empty_list_placeholder() {
    let mut app = utc_app(Vec::new());

    let text = screen_text(&draw(&mut app, 60, 6));

    assert!(text.contains("(no earthquakes)"), "{}", text);
    assert!(text.contains("0/0"), "{}", text);
}

#[test]
fn test_scroll_keeps_selection_visible() {
    let quakes = sample_earthquakes();
    let last = quakes.last().unwrap().clone();
    let mut app = utc_app(quakes);
    app.selected = app.adapter.count() - 1;

    // 10 lines: 1 status, 2 border, 3 rows of 2 lines each
    let text = screen_text(&draw(&mut app, 80, 10));

    assert!(app.list_scroll.offset > 0);
    assert!(text.contains("Honshu, Japan"), "{}", text);
    assert!(!text.contains("Yelizovo"), "{}", text);
    assert!(last.location().ends_with("Honshu, Japan"));
}
