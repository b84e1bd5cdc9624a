//! Configuration and local storage for the swimlane application.
//!
//! This crate handles loading and validating the configuration file, the
//! light/dark theme preference, and persisting the board's cards.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`drag`]: Drag feedback settings
//! - [`theme`]: The light/dark theme preference
//! - [`storage`]: Key-value storage for cards and theme
//! - [`persistence`]: Config file discovery, reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. Local config (`./swimlane.json5` or `./swimlane.json`)
//! 2. User config (`~/.config/swimlane/config.json5` or `~/.config/swimlane/config.json`)
//! 3. Built-in defaults
//!
//! ```json5
//! {
//!   // Used until the theme is toggled in the app
//!   theme: "light",
//!   // Where cards, theme preference and the log are kept
//!   data_dir: "~/boards/work",
//!   drag: { highlight_radius: 3 },
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use swimlane_config::{Config, storage::{BoardStorage, FileStore}};
//!
//! # async fn example() -> swimlane_config::Result<()> {
//! let config = Config::load().await?;
//! let storage = BoardStorage::new(FileStore::new(config.resolve_data_dir()?));
//! let cards = storage.load_cards();
//! println!("{} cards on the board", cards.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod drag;
pub mod error;
pub mod persistence;
pub mod storage;
pub mod theme;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use drag::DragConfig;
pub use error::{ConfigError, Result};
pub use storage::{BoardStorage, FileStore, KeyValueStore, MemoryStore};
pub use theme::Theme;
