//! swimlane - A terminal Kanban board with mouse drag-and-drop.
//!
//! This is the main binary: it loads the configuration, sets up logging and
//! storage, and launches the TUI application.

use std::fs::{self, File};
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;
use swimlane_config::{BoardStorage, Config, FileStore};
use swimlane_tui::{App, terminal};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter directives.
const LOG_ENV: &str = "SWIMLANE_LOG";

/// Log file name inside the data directory.
const LOG_FILE: &str = "swimlane.log";

/// Sends logs to a file in `data_dir`; the terminal belongs to the UI.
fn init_logging(data_dir: &Path) -> anyhow::Result<()> {
    let path = data_dir.join(LOG_FILE);
    let file = File::options()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().await.context("failed to load configuration")?;
    let data_dir = config.resolve_data_dir()?;
    fs::create_dir_all(&data_dir)
        .with_context(|| format!("failed to create data directory {}", data_dir.display()))?;

    init_logging(&data_dir)?;
    tracing::info!(data_dir = %data_dir.display(), "starting swimlane");

    let storage = BoardStorage::new(FileStore::new(data_dir));
    let mut app = App::new(storage, &config);

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();

    let mut terminal = terminal::setup_terminal()?;

    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "swimlane exited with an error");
    }
    result
}
