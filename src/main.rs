// QuakeReport: earthquake list with magnitude-colored rows

use std::io;

use anyhow::Context as _;
use clap::Parser as _;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::LevelFilter;
use ratatui::{Terminal, backend::CrosstermBackend};

use quakereport::adapter::EarthquakeAdapter;
use quakereport::config::Cli;
use quakereport::earthquake::sample_earthquakes;
use quakereport::ui::App;

/// Default log level for debug builds.
#[cfg(debug_assertions)]
const DEFAULT_LOG_FILTER_LEVEL: LevelFilter = LevelFilter::Info;

/// Reduce log verbosity for release builds.
#[cfg(not(debug_assertions))]
const DEFAULT_LOG_FILTER_LEVEL: LevelFilter = LevelFilter::Warn;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(DEFAULT_LOG_FILTER_LEVEL)
        // Parse environment variables after configuring all default option(s).
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = cli.display_config();
    log::info!("Showing times in {}", config.time_zone);

    let earthquakes = sample_earthquakes();
    log::info!("Loaded {} earthquakes", earthquakes.len());
    let adapter = EarthquakeAdapter::new(earthquakes, config);

    // Set up terminal; nothing may log to stderr until it is restored
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    // Create and run app
    let mut app = App::new(adapter);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("Terminal UI failed: {err}");
        return Err(err.into());
    }

    Ok(())
}
