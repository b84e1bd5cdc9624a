//! Local key-value storage for the board.
//!
//! Cards and the theme preference are kept as small values under fixed keys.
//! [`FileStore`] maps each key to a file in the data directory:
//!
//! ```text
//! ~/.local/share/swimlane/
//! ├── kanban-cards.json   # JSON array of cards
//! └── theme               # "light" or "dark"
//! ```
//!
//! [`BoardStorage`] sits on top of any [`KeyValueStore`] and never fails:
//! missing or corrupt data falls back to defaults, and write failures are
//! logged and otherwise ignored.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use swimlane_protocol::CardStore;
use tracing::{debug, instrument, warn};

use crate::error::{ConfigError, Result};
use crate::theme::Theme;

/// Key holding the serialized cards.
pub const CARDS_KEY: &str = "kanban-cards";

/// Key holding the theme preference.
pub const THEME_KEY: &str = "theme";

/// A string-to-string store.
pub trait KeyValueStore {
    /// Returns the value under `key`, or `None` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the value exists but cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// File-backed store: one file per key inside a directory.
///
/// The directory is created on first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the directory holding the files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file that backs `key`.
    ///
    /// The cards key gets a `.json` extension; other keys are used as-is.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        if key == CARDS_KEY {
            self.dir.join(format!("{key}.json"))
        } else {
            self.dir.join(key)
        }
    }

    /// Returns the scratch file a write to `key` goes through.
    fn temp_path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.tmp"))
    }
}

impl KeyValueStore for FileStore {
    #[instrument(skip(self))]
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(?path, "storage file not found");
                Ok(None)
            }
            Err(source) => Err(ConfigError::ReadStorage {
                key: key.to_string(),
                path,
                source,
            }),
        }
    }

    #[instrument(skip(self, value), fields(bytes = value.len()))]
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        let write_err = |source| ConfigError::WriteStorage {
            key: key.to_string(),
            path: path.clone(),
            source,
        };

        if !self.dir.exists() {
            debug!(dir = ?self.dir, "creating data directory");
            fs::create_dir_all(&self.dir).map_err(write_err)?;
        }
        // Temp file then rename, so a crash mid-write leaves the old value.
        let temp = self.temp_path_for(key);
        fs::write(&temp, value).map_err(write_err)?;
        fs::rename(&temp, &path).map_err(write_err)?;
        debug!(?path, "storage file written");
        Ok(())
    }
}

/// In-memory store, used when nothing should touch the disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Loads and saves the board's cards and theme preference.
///
/// # Examples
///
/// ```
/// use swimlane_config::storage::{BoardStorage, MemoryStore};
/// use swimlane_protocol::ColumnId;
///
/// let mut storage = BoardStorage::new(MemoryStore::new());
/// let mut cards = storage.load_cards();
/// assert!(cards.is_empty());
///
/// cards.add("Ship it", ColumnId::Doing);
/// storage.save_cards(&cards);
/// assert_eq!(storage.load_cards(), cards);
/// ```
#[derive(Debug, Clone)]
pub struct BoardStorage<S> {
    store: S,
}

impl<S: KeyValueStore> BoardStorage<S> {
    /// Wraps a key-value store.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Loads the saved cards.
    ///
    /// Returns an empty store if nothing is saved or the saved data cannot
    /// be read or decoded.
    #[instrument(skip(self))]
    pub fn load_cards(&self) -> CardStore {
        let json = match self.store.get(CARDS_KEY) {
            Ok(Some(json)) => json,
            Ok(None) => return CardStore::new(),
            Err(e) => {
                warn!(error = %e, "failed to read saved cards, starting empty");
                return CardStore::new();
            }
        };

        match CardStore::from_json(&json) {
            Ok(cards) => {
                debug!(cards = cards.len(), "loaded saved cards");
                cards
            }
            Err(e) => {
                warn!(error = %e, "saved cards are corrupt, starting empty");
                CardStore::new()
            }
        }
    }

    /// Saves the cards, logging any failure.
    #[instrument(skip(self, cards), fields(cards = cards.len()))]
    pub fn save_cards(&mut self, cards: &CardStore) {
        if let Err(e) = self.try_save_cards(cards) {
            warn!(error = %e, "failed to save cards");
        }
    }

    fn try_save_cards(&mut self, cards: &CardStore) -> Result<()> {
        let json = cards.to_json()?;
        self.store.set(CARDS_KEY, &json)
    }

    /// Loads the saved theme preference, if any.
    ///
    /// Unreadable or unrecognized values count as no preference.
    pub fn load_theme(&self) -> Option<Theme> {
        match self.store.get(THEME_KEY) {
            Ok(Some(value)) => value
                .parse()
                .map_err(|e: ConfigError| warn!(error = %e, "ignoring saved theme"))
                .ok(),
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "failed to read saved theme");
                None
            }
        }
    }

    /// Saves the theme preference, logging any failure.
    pub fn save_theme(&mut self, theme: Theme) {
        if let Err(e) = self.store.set(THEME_KEY, theme.as_str()) {
            warn!(error = %e, "failed to save theme");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swimlane_protocol::{Card, ColumnId};
    use tempfile::TempDir;

    #[test]
    fn file_store_paths() {
        let store = FileStore::new("/data/swimlane");
        assert_eq!(
            store.path_for(CARDS_KEY),
            PathBuf::from("/data/swimlane/kanban-cards.json")
        );
        assert_eq!(store.path_for(THEME_KEY), PathBuf::from("/data/swimlane/theme"));
    }

    #[test]
    fn file_store_missing_key_is_none() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("absent"));
        assert!(store.get(THEME_KEY).unwrap().is_none());
    }

    #[test]
    fn file_store_creates_directory_on_write() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("nested").join("swimlane"));

        store.set(THEME_KEY, "light").unwrap();

        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
        assert!(store.dir().join("theme").is_file());
    }

    #[test]
    fn file_store_write_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path());

        store.set(CARDS_KEY, "[]").unwrap();
        store.set(CARDS_KEY, "[ ]").unwrap();

        assert_eq!(store.get(CARDS_KEY).unwrap().as_deref(), Some("[ ]"));
        assert!(!dir.path().join("kanban-cards.tmp").exists());
    }

    #[test]
    fn interrupted_write_keeps_previous_cards() {
        let dir = TempDir::new().unwrap();
        let mut storage = BoardStorage::new(FileStore::new(dir.path()));
        let mut cards = CardStore::new();
        cards.add("Keep me", ColumnId::Todo);
        storage.save_cards(&cards);

        // A crash between writing the scratch file and the rename.
        fs::write(dir.path().join("kanban-cards.tmp"), r#"[{"id":"1","ti"#).unwrap();

        let reopened = BoardStorage::new(FileStore::new(dir.path()));
        assert_eq!(reopened.load_cards(), cards);
    }

    #[test]
    fn cards_roundtrip_through_files() {
        let dir = TempDir::new().unwrap();
        let mut storage = BoardStorage::new(FileStore::new(dir.path()));

        let mut cards = CardStore::new();
        cards.add("A", ColumnId::Todo);
        cards.add_with_description("B", Some("details"), ColumnId::InProgress);
        storage.save_cards(&cards);

        let reopened = BoardStorage::new(FileStore::new(dir.path()));
        assert_eq!(reopened.load_cards(), cards);
    }

    #[test]
    fn corrupt_cards_fall_back_to_empty() {
        let mut store = MemoryStore::new();
        store.set(CARDS_KEY, "{not json").unwrap();
        assert!(BoardStorage::new(store).load_cards().is_empty());

        let mut store = MemoryStore::new();
        store
            .set(CARDS_KEY, r#"[{"id":"1","title":"A","column":"archive"}]"#)
            .unwrap();
        assert!(BoardStorage::new(store).load_cards().is_empty());
    }

    #[test]
    fn duplicate_ids_keep_first() {
        let cards = vec![
            Card::with_id("1", "first", ColumnId::Todo),
            Card::with_id("1", "second", ColumnId::Done),
        ];
        let mut store = MemoryStore::new();
        store
            .set(CARDS_KEY, &serde_json::to_string(&cards).unwrap())
            .unwrap();

        let loaded = BoardStorage::new(store).load_cards();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.snapshot()[0].title, "first");
    }

    #[test]
    fn unreadable_cards_fall_back_to_empty() {
        let dir = TempDir::new().unwrap();
        // A directory where the file should be makes the read fail.
        fs::create_dir(dir.path().join("kanban-cards.json")).unwrap();

        let storage = BoardStorage::new(FileStore::new(dir.path()));
        assert!(storage.load_cards().is_empty());
    }

    #[test]
    fn theme_roundtrip() {
        let mut storage = BoardStorage::new(MemoryStore::new());
        assert_eq!(storage.load_theme(), None);

        storage.save_theme(Theme::Light);
        assert_eq!(storage.load_theme(), Some(Theme::Light));
        assert_eq!(
            storage.store().get(THEME_KEY).unwrap().as_deref(),
            Some("light")
        );
    }

    #[test]
    fn unknown_theme_is_ignored() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "sepia").unwrap();
        assert_eq!(BoardStorage::new(store).load_theme(), None);
    }

    #[test]
    fn failed_save_is_not_fatal() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "").unwrap();

        // The data directory path is a regular file, so writes fail.
        let mut storage = BoardStorage::new(FileStore::new(&blocker));
        storage.save_cards(&CardStore::new());
        storage.save_theme(Theme::Dark);
        assert_eq!(storage.load_theme(), None);
    }
}
