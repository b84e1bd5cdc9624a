//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the swimlane application.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::drag::DragConfig;
use crate::error::Result;
use crate::persistence::{
    default_data_dir, find_config_file, read_config_file, read_config_file_async,
};
use crate::theme::Theme;

/// The main configuration struct for the swimlane application.
///
/// # Examples
///
/// ```
/// use swimlane_config::{Config, DragConfig, Theme};
///
/// let config = Config::default();
/// assert!(config.theme.is_none());
///
/// let config = Config {
///     theme: Some(Theme::Light),
///     data_dir: Some("/tmp/board".into()),
///     drag: DragConfig { highlight_radius: 2.0 },
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Theme used when no preference has been stored yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,

    /// Directory holding the board's cards, theme preference and log.
    ///
    /// Defaults to the platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Drag feedback settings.
    #[serde(default)]
    pub drag: DragConfig,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// If no configuration file is found, returns a default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use swimlane_config::Config;
    ///
    /// # async fn example() -> swimlane_config::Result<()> {
    /// let config = Config::load().await?;
    /// println!("Data in {}", config.resolve_data_dir()?.display());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => {
                info!(path = %path.display(), "loading config");
                let config: Config = read_config_file_async(&path).await?;
                config.validate()?;
                Ok(config)
            }
            None => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the drag settings are invalid.
    pub fn validate(&self) -> Result<()> {
        self.drag.validate()
    }

    /// Returns the directory holding board data.
    ///
    /// # Errors
    ///
    /// Returns an error if no directory is configured and the platform data
    /// directory cannot be determined.
    pub fn resolve_data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => default_data_dir(),
        }
    }
}
