//! Locating and reading configuration files, and resolving where board data
//! lives.
//!
//! # File Formats
//!
//! Config files may be JSON5 (`.json5`, with comments and trailing commas) or
//! plain JSON (`.json`). Both are read with the JSON5 parser.
//!
//! # File Locations
//!
//! Configuration is searched in the following order:
//!
//! 1. Local: `./swimlane.json5` or `./swimlane.json`
//! 2. User: `~/.config/swimlane/config.json5` or `~/.config/swimlane/config.json`
//!
//! Board data (cards, theme preference, log file) is kept under the platform
//! data directory, e.g. `~/.local/share/swimlane/`, unless the config file
//! names another directory.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConfigError, Result};

/// Directory name used under the platform config and data directories.
pub const APP_DIR: &str = "swimlane";

/// Local config file names, in priority order.
const LOCAL_FILE_NAMES: &[&str] = &["swimlane.json5", "swimlane.json"];

/// User config file names, in priority order.
const USER_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Returns the first existing candidate config file.
///
/// `local_dir` is searched for `swimlane.json5`/`swimlane.json`, then
/// `user_dir` for `config.json5`/`config.json`.
#[must_use]
pub fn find_config_file_in(local_dir: &Path, user_dir: Option<&Path>) -> Option<PathBuf> {
    let local = LOCAL_FILE_NAMES.iter().map(|name| local_dir.join(name));
    let user = user_dir
        .into_iter()
        .flat_map(|dir| USER_FILE_NAMES.iter().map(move |name| dir.join(name)));

    local.chain(user).find(|path| path.is_file())
}

/// Finds the configuration file in the working directory or the user config
/// directory.
///
/// # Examples
///
/// ```no_run
/// use swimlane_config::persistence::find_config_file;
///
/// if let Some(path) = find_config_file() {
///     println!("Found config at: {}", path.display());
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    let user_dir = user_config_dir().ok();
    find_config_file_in(Path::new("."), user_dir.as_deref())
}

/// Returns the user configuration directory, typically `~/.config/swimlane/`.
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDirectory`] if the home directory cannot be
/// determined.
pub fn user_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|d| d.join(APP_DIR))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Returns the default board data directory, typically
/// `~/.local/share/swimlane/`.
///
/// # Errors
///
/// Returns [`ConfigError::NoDataDirectory`] if the platform has no data
/// directory.
pub fn default_data_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|d| d.join(APP_DIR))
        .ok_or(ConfigError::NoDataDirectory)
}

fn parse<T: serde::de::DeserializeOwned>(content: &str) -> Result<T> {
    serde_json5::from_str(content).map_err(ConfigError::from)
}

/// Reads and parses a configuration file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
///
/// # Examples
///
/// ```no_run
/// use swimlane_config::persistence::read_config_file;
/// use swimlane_config::Config;
///
/// # fn main() -> swimlane_config::Result<()> {
/// let config: Config = read_config_file("swimlane.json5")?;
/// # Ok(())
/// # }
/// ```
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "read config file");
    parse(&content)
}

/// Async variant of [`read_config_file`], used at startup.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub async fn read_config_file_async<T: serde::de::DeserializeOwned>(
    path: impl AsRef<Path>,
) -> Result<T> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), "read config file");
    parse(&content)
}
