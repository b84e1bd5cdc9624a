//! Error types for the swimlane-protocol crate.
//!
//! Board operations themselves never fail: invalid input and stale
//! identifiers are reported through return values. The errors here cover
//! decoding persisted cards and parsing column names.

use thiserror::Error;

/// Errors that can occur during protocol operations.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Failed to serialize the card store to JSON.
    #[error("failed to serialize to JSON: {0}")]
    SerializationFailed(#[source] serde_json::Error),

    /// Failed to deserialize the card store from JSON.
    #[error("failed to deserialize from JSON: {0}")]
    DeserializationFailed(#[source] serde_json::Error),

    /// A column name did not match any of the board's columns.
    #[error("unknown column: {0:?}")]
    UnknownColumn(String),
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;
