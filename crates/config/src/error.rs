//! Error types for configuration and storage operations.
//!
//! This module defines the error types that can occur during configuration
//! loading, parsing, and validation, and while reading or writing the
//! board's key-value storage.

use std::path::PathBuf;

/// Errors that can occur during configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file at {path}: {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse JSON5 configuration.
    #[error("failed to parse config: {0}")]
    ParseJson5(#[from] serde_json5::Error),

    /// Invalid drop highlight radius.
    #[error("invalid highlight radius: {reason}")]
    InvalidHighlightRadius {
        /// The reason the radius is invalid.
        reason: String,
    },

    /// A theme name was neither `light` nor `dark`.
    #[error("invalid theme: {0:?}")]
    InvalidTheme(String),

    /// Failed to determine home directory.
    #[error("could not determine home directory")]
    NoHomeDirectory,

    /// Failed to determine where board data is stored.
    #[error("could not determine data directory")]
    NoDataDirectory,

    /// Failed to read a storage entry.
    #[error("failed to read storage key {key:?} at {path}: {source}")]
    ReadStorage {
        /// The storage key.
        key: String,
        /// The file backing the key.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a storage entry.
    #[error("failed to write storage key {key:?} at {path}: {source}")]
    WriteStorage {
        /// The storage key.
        key: String,
        /// The file backing the key.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to encode the card store.
    #[error("failed to encode cards: {0}")]
    EncodeCards(#[from] swimlane_protocol::ProtocolError),
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
