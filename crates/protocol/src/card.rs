//! Card and column types for the Kanban board.
//!
//! This module defines the card identifier, the fixed set of workflow
//! columns, and the card structure itself.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// Unique identifier for a card.
///
/// Identifiers are opaque strings. Freshly created cards get a UUID v4,
/// but any string read back from storage is accepted as-is.
///
/// # Examples
///
/// ```
/// use swimlane_protocol::CardId;
///
/// let id = CardId::new("0.4127");
/// assert_eq!(id.as_str(), "0.4127");
/// assert_ne!(CardId::generate(), CardId::generate());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Wraps an existing identifier string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh, globally unique identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CardId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A workflow column on the board.
///
/// The set is fixed and ordered; the order is the left-to-right order in
/// which columns are displayed.
///
/// # Examples
///
/// ```
/// use swimlane_protocol::ColumnId;
///
/// let column: ColumnId = "in-progress".parse().unwrap();
/// assert_eq!(column, ColumnId::InProgress);
/// assert_eq!(column.display_name(), "In progress");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnId {
    /// Ideas and requests nobody has committed to yet.
    #[default]
    Backlog,
    /// Committed work that has not started.
    Todo,
    /// Work that has started.
    Doing,
    /// Work being actively pushed right now.
    Active,
    /// Work in flight, waiting on something.
    InProgress,
    /// Finished work.
    Done,
}

impl ColumnId {
    /// Number of columns on the board.
    pub const COUNT: usize = 6;

    /// Returns all columns in display order.
    ///
    /// # Examples
    ///
    /// ```
    /// use swimlane_protocol::ColumnId;
    ///
    /// let columns = ColumnId::all();
    /// assert_eq!(columns.len(), ColumnId::COUNT);
    /// assert_eq!(columns[0], ColumnId::Backlog);
    /// assert_eq!(columns[5], ColumnId::Done);
    /// ```
    #[must_use]
    pub const fn all() -> [Self; Self::COUNT] {
        [
            Self::Backlog,
            Self::Todo,
            Self::Doing,
            Self::Active,
            Self::InProgress,
            Self::Done,
        ]
    }

    /// Returns the wire name used in storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backlog => "backlog",
            Self::Todo => "todo",
            Self::Doing => "doing",
            Self::Active => "active",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }

    /// Returns the heading shown above the column.
    ///
    /// # Examples
    ///
    /// ```
    /// use swimlane_protocol::ColumnId;
    ///
    /// assert_eq!(ColumnId::Todo.display_name(), "Todo");
    /// assert_eq!(ColumnId::InProgress.display_name(), "In progress");
    /// ```
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Backlog => "Backlog",
            Self::Todo => "Todo",
            Self::Doing => "Doing",
            Self::Active => "Active",
            Self::InProgress => "In progress",
            Self::Done => "Done",
        }
    }

    /// Returns the position of this column on the board (0-5).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Backlog => 0,
            Self::Todo => 1,
            Self::Doing => 2,
            Self::Active => 3,
            Self::InProgress => 4,
            Self::Done => 5,
        }
    }

    /// Creates a `ColumnId` from its position.
    ///
    /// Returns `None` if the index is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use swimlane_protocol::ColumnId;
    ///
    /// assert_eq!(ColumnId::from_index(1), Some(ColumnId::Todo));
    /// assert_eq!(ColumnId::from_index(6), None);
    /// ```
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Backlog),
            1 => Some(Self::Todo),
            2 => Some(Self::Doing),
            3 => Some(Self::Active),
            4 => Some(Self::InProgress),
            5 => Some(Self::Done),
            _ => None,
        }
    }

    /// Returns the heading color as an RGB triple.
    ///
    /// The same color is used for the column heading and for the column's
    /// share in the distribution summary.
    ///
    /// | Column | Color |
    /// |--------|-------|
    /// | `backlog` | Tomato `#FF6347` |
    /// | `todo` | Gold `#FFD700` |
    /// | `doing` | Dodger blue `#1E90FF` |
    /// | `active` | Blue violet `#8A2BE2` |
    /// | `in-progress` | Orange `#FFA500` |
    /// | `done` | Lime green `#32CD32` |
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Backlog => (0xFF, 0x63, 0x47),
            Self::Todo => (0xFF, 0xD7, 0x00),
            Self::Doing => (0x1E, 0x90, 0xFF),
            Self::Active => (0x8A, 0x2B, 0xE2),
            Self::InProgress => (0xFF, 0xA5, 0x00),
            Self::Done => (0x32, 0xCD, 0x32),
        }
    }

    /// Returns the column a card's "advance" action moves it to.
    ///
    /// Backlog moves to Todo, Todo to Doing, and every in-flight column
    /// straight to Done. Done has nowhere further to go.
    ///
    /// # Examples
    ///
    /// ```
    /// use swimlane_protocol::ColumnId;
    ///
    /// assert_eq!(ColumnId::Backlog.next_stage(), Some(ColumnId::Todo));
    /// assert_eq!(ColumnId::Active.next_stage(), Some(ColumnId::Done));
    /// assert_eq!(ColumnId::Done.next_stage(), None);
    /// ```
    #[must_use]
    pub const fn next_stage(self) -> Option<Self> {
        match self {
            Self::Backlog => Some(Self::Todo),
            Self::Todo => Some(Self::Doing),
            Self::Doing | Self::Active | Self::InProgress => Some(Self::Done),
            Self::Done => None,
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnId {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|column| column.as_str() == s)
            .ok_or_else(|| ProtocolError::UnknownColumn(s.to_string()))
    }
}

/// A card on the board.
///
/// # Examples
///
/// ```
/// use swimlane_protocol::{Card, ColumnId};
///
/// let card = Card::new("Write release notes", ColumnId::Todo);
/// assert_eq!(card.column, ColumnId::Todo);
/// assert!(card.description.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier, fixed for the lifetime of the card.
    pub id: CardId,
    /// Short summary shown on the card.
    pub title: String,
    /// Optional longer text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The column the card currently sits in.
    pub column: ColumnId,
}

impl Card {
    /// Creates a card with a freshly generated id.
    #[must_use]
    pub fn new(title: impl Into<String>, column: ColumnId) -> Self {
        Self::with_id(CardId::generate(), title, column)
    }

    /// Creates a card with a specific id.
    ///
    /// Useful for tests and for rebuilding cards from storage.
    #[must_use]
    pub fn with_id(id: impl Into<CardId>, title: impl Into<String>, column: ColumnId) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            column,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns a copy of this card placed in another column.
    #[must_use]
    pub fn moved_to(&self, column: ColumnId) -> Self {
        Self {
            column,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_index_roundtrip() {
        for column in ColumnId::all() {
            assert_eq!(ColumnId::from_index(column.index()), Some(column));
        }
    }

    #[test]
    fn column_wire_names() {
        let json = serde_json::to_string(&ColumnId::InProgress).expect("serialize");
        assert_eq!(json, r#""in-progress""#);

        for column in ColumnId::all() {
            let json = serde_json::to_string(&column).expect("serialize");
            assert_eq!(json, format!("\"{}\"", column.as_str()));
            assert_eq!(column.as_str().parse::<ColumnId>().ok(), Some(column));
        }
    }

    #[test]
    fn unknown_column_is_rejected() {
        assert!("review".parse::<ColumnId>().is_err());
        assert!(serde_json::from_str::<ColumnId>(r#""in_progress""#).is_err());
    }

    #[test]
    fn next_stage_never_moves_backwards() {
        for column in ColumnId::all() {
            if let Some(next) = column.next_stage() {
                assert!(next.index() > column.index());
            }
        }
    }

    #[test]
    fn card_json_shape() {
        let card = Card::with_id("1", "A", ColumnId::Todo);
        let json = serde_json::to_string(&card).expect("serialize");
        assert_eq!(json, r#"{"id":"1","title":"A","column":"todo"}"#);

        let card = card.with_description("details");
        let json = serde_json::to_string(&card).expect("serialize");
        assert_eq!(
            json,
            r#"{"id":"1","title":"A","description":"details","column":"todo"}"#
        );
    }

    #[test]
    fn moved_to_keeps_identity() {
        let card = Card::with_id("7", "Ship it", ColumnId::Doing).with_description("today");
        let moved = card.moved_to(ColumnId::Done);

        assert_eq!(moved.id, card.id);
        assert_eq!(moved.title, card.title);
        assert_eq!(moved.description, card.description);
        assert_eq!(moved.column, ColumnId::Done);
    }

    #[test]
    fn generated_ids_are_unique() {
        let a = Card::new("A", ColumnId::Backlog);
        let b = Card::new("A", ColumnId::Backlog);
        assert_ne!(a.id, b.id);
    }
}
