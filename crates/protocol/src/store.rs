//! The card store: the single ordered sequence of cards.
//!
//! The order of the sequence is the display order of cards within each
//! column. Every mutation computes a new sequence and replaces the old one in
//! a single assignment, so readers never observe a half-applied change.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::card::{Card, CardId, ColumnId};
use crate::error::{ProtocolError, Result};
use crate::locator::InsertionPoint;
use crate::reducer::reorder;

/// Ordered collection of every card on the board.
///
/// # Examples
///
/// ```
/// use swimlane_protocol::{CardStore, ColumnId, InsertionPoint};
///
/// let mut store = CardStore::new();
/// let a = store.add("Write docs", ColumnId::Todo).unwrap();
/// let b = store.add("Fix bug", ColumnId::Todo).unwrap();
///
/// // Blank titles are ignored.
/// assert!(store.add("   ", ColumnId::Todo).is_none());
///
/// store.move_card(&b, ColumnId::Todo, &InsertionPoint::Before(a.clone()));
/// let titles: Vec<_> = store.cards_in(ColumnId::Todo).map(|c| c.title.as_str()).collect();
/// assert_eq!(titles, ["Fix bug", "Write docs"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardStore {
    cards: Vec<Card>,
}

impl CardStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from existing cards.
    ///
    /// If several cards share an id, only the first one is kept.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        let mut seen = HashSet::new();
        let cards = cards
            .into_iter()
            .filter(|card| seen.insert(card.id.clone()))
            .collect();
        Self { cards }
    }

    /// Appends a new card to `column`.
    ///
    /// The title is trimmed; a blank title leaves the store unchanged and
    /// returns `None`.
    pub fn add(&mut self, title: &str, column: ColumnId) -> Option<CardId> {
        self.add_with_description(title, None, column)
    }

    /// Appends a new card with an optional description.
    ///
    /// The description is trimmed and dropped when blank.
    pub fn add_with_description(
        &mut self,
        title: &str,
        description: Option<&str>,
        column: ColumnId,
    ) -> Option<CardId> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }

        let mut card = Card::new(title, column);
        card.description = description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);
        let id = card.id.clone();

        let mut next = self.cards.clone();
        next.push(card);
        self.cards = next;

        debug!(card_id = %id, column = %column, "card added");
        Some(id)
    }

    /// Removes the card with `id`. Returns false if it was not present.
    pub fn remove(&mut self, id: &CardId) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.cards = self
            .cards
            .iter()
            .filter(|card| &card.id != id)
            .cloned()
            .collect();
        debug!(card_id = %id, "card removed");
        true
    }

    /// Moves the card with `id` into `column` at `target`.
    ///
    /// Returns false, leaving the store untouched, if the card is not in the
    /// store or `target` is the card's own slot.
    pub fn move_card(&mut self, id: &CardId, column: ColumnId, target: &InsertionPoint) -> bool {
        match reorder(&self.cards, id, column, target) {
            Some(next) => {
                self.cards = next;
                debug!(card_id = %id, column = %column, target = target.as_marker(), "card moved");
                true
            }
            None => false,
        }
    }

    /// Changes a card's column without changing its place in the sequence.
    ///
    /// Returns false if the card is not in the store.
    pub fn set_column(&mut self, id: &CardId, column: ColumnId) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.cards = self
            .cards
            .iter()
            .map(|card| {
                if &card.id == id {
                    card.moved_to(column)
                } else {
                    card.clone()
                }
            })
            .collect();
        debug!(card_id = %id, column = %column, "card column changed");
        true
    }

    /// Returns every card in order.
    #[must_use]
    pub fn snapshot(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the card with `id`.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|card| &card.id == id)
    }

    /// Returns true if a card with `id` exists.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the cards of one column, in display order.
    pub fn cards_in(&self, column: ColumnId) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |card| card.column == column)
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns true if there are no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Serializes the store as a JSON array of cards.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::SerializationFailed`] if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.cards).map_err(ProtocolError::SerializationFailed)
    }

    /// Parses a store from a JSON array of cards.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::DeserializationFailed`] if the text is not a
    /// valid card array, including cards with an unknown column.
    pub fn from_json(json: &str) -> Result<Self> {
        let cards: Vec<Card> =
            serde_json::from_str(json).map_err(ProtocolError::DeserializationFailed)?;
        Ok(Self::from_cards(cards))
    }
}
