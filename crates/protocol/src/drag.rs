//! Drag session state and the drag payload.
//!
//! A drag gesture carries the dragged card's id in two places: the
//! [`DragPayload`], a small string map that travels with the gesture, and the
//! [`DragSession`], which tracks whether a drag is in progress and what it is
//! currently hovering.

use std::collections::BTreeMap;

use tracing::debug;

use crate::card::{CardId, ColumnId};

/// Payload field that carries the dragged card's id.
pub const CARD_ID_FIELD: &str = "cardId";

/// Data transferred along with a drag gesture.
///
/// # Examples
///
/// ```
/// use swimlane_protocol::{CARD_ID_FIELD, DragPayload};
///
/// let mut payload = DragPayload::default();
/// payload.set_data(CARD_ID_FIELD, "42");
/// assert_eq!(payload.get_data(CARD_ID_FIELD), Some("42"));
///
/// payload.clear();
/// assert!(payload.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragPayload {
    data: BTreeMap<String, String>,
}

impl DragPayload {
    /// Stores a value under `field`, replacing any previous value.
    pub fn set_data(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.data.insert(field.into(), value.into());
    }

    /// Returns the value stored under `field`.
    #[must_use]
    pub fn get_data(&self, field: &str) -> Option<&str> {
        self.data.get(field).map(String::as_str)
    }

    /// Returns the card id carried by this payload, if any.
    ///
    /// An empty value counts as no id.
    #[must_use]
    pub fn card_id(&self) -> Option<CardId> {
        self.get_data(CARD_ID_FIELD)
            .filter(|id| !id.is_empty())
            .map(CardId::new)
    }

    /// Removes every field.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns true if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// What an in-progress drag is currently over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTarget {
    /// A column, with the index of its highlighted slot marker.
    Column {
        /// The hovered column.
        column: ColumnId,
        /// Index of the highlighted slot marker within the column.
        slot: usize,
        /// Whether the highlighted slot is drawn emphasized.
        emphasized: bool,
    },
    /// The burn barrel.
    BurnBarrel,
}

/// Lifecycle of a drag gesture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A card is being dragged.
    Dragging {
        /// The dragged card.
        card_id: CardId,
        /// Current drop target, if the pointer is over one.
        hover: Option<HoverTarget>,
    },
}

/// Ephemeral state of the current drag gesture.
///
/// # Examples
///
/// ```
/// use swimlane_protocol::{CARD_ID_FIELD, CardId, DragPayload, DragSession};
///
/// let mut session = DragSession::default();
/// let mut payload = DragPayload::default();
///
/// session.start(CardId::new("a"), &mut payload);
/// assert!(session.is_active());
/// assert_eq!(payload.get_data(CARD_ID_FIELD), Some("a"));
///
/// session.cancel();
/// assert!(!session.is_active());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragSession {
    state: DragState,
}

impl DragSession {
    /// Starts dragging `card_id`, recording it in the payload.
    ///
    /// A drag already in progress is replaced.
    pub fn start(&mut self, card_id: CardId, payload: &mut DragPayload) {
        debug!(card_id = %card_id, "drag started");
        payload.set_data(CARD_ID_FIELD, card_id.as_str());
        self.state = DragState::Dragging {
            card_id,
            hover: None,
        };
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Returns true while a card is being dragged.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Returns the dragged card's id.
    #[must_use]
    pub fn dragged(&self) -> Option<&CardId> {
        match &self.state {
            DragState::Dragging { card_id, .. } => Some(card_id),
            DragState::Idle => None,
        }
    }

    /// Returns the current drop target.
    #[must_use]
    pub fn hover(&self) -> Option<HoverTarget> {
        match &self.state {
            DragState::Dragging { hover, .. } => *hover,
            DragState::Idle => None,
        }
    }

    /// Records the target under the pointer. Ignored when idle.
    pub fn hover_over(&mut self, target: HoverTarget) {
        if let DragState::Dragging { hover, .. } = &mut self.state {
            *hover = Some(target);
        }
    }

    /// Clears the hovered target without ending the drag.
    pub fn leave(&mut self) {
        if let DragState::Dragging { hover, .. } = &mut self.state {
            *hover = None;
        }
    }

    /// Ends the drag without a drop.
    pub fn cancel(&mut self) {
        if let Some(card_id) = self.dragged() {
            debug!(card_id = %card_id, "drag cancelled");
        }
        self.state = DragState::Idle;
    }

    /// Ends the drag after a drop and returns the dragged card's id.
    pub fn finish(&mut self) -> Option<CardId> {
        match std::mem::take(&mut self.state) {
            DragState::Dragging { card_id, .. } => Some(card_id),
            DragState::Idle => None,
        }
    }
}
