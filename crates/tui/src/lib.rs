//! Terminal UI for the swimlane application.
//!
//! This crate provides a Ratatui-based Kanban board driven by mouse drag
//! gestures: press a card, move the pointer to a drop slot in any column,
//! release to drop. Releasing over the burn barrel deletes the card.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct and run loop
//! - [`state`]: Application state management
//! - [`form`]: The add-card form
//! - [`layout`]: Screen regions and size thresholds
//! - [`geometry`]: Card, slot and column positions for rendering and hit-testing
//! - [`palette`]: Light and dark theme colors
//! - [`widgets`]: Rendering functions
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event handling and key mappings
//!
//! # Example
//!
//! ```no_run
//! use swimlane_config::{BoardStorage, Config, FileStore};
//! use swimlane_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load().await?;
//!     let storage = BoardStorage::new(FileStore::new(config.resolve_data_dir()?));
//!
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let mut app = App::new(storage, &config);
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod event;
pub mod form;
pub mod geometry;
pub mod layout;
pub mod palette;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use state::{AppState, Focus, Press};
