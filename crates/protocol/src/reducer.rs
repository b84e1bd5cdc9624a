//! Applying drops to the card sequence.
//!
//! [`reorder`] is the pure core: it computes the sequence that results from
//! moving one card to a column and slot. [`handle_drop`] wraps it with the
//! drag-session preconditions and always ends the session.

use tracing::debug;

use crate::card::{Card, CardId, ColumnId};
use crate::drag::{DragPayload, DragSession};
use crate::locator::InsertionPoint;
use crate::store::CardStore;

/// Result of a drop on a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// The card was moved.
    Moved(CardId),
    /// No drag was in progress, or the payload carried no card id.
    NoDraggedCard,
    /// The card was dropped on the slot directly above itself.
    OwnSlot,
    /// The dragged card is no longer in the store.
    CardMissing(CardId),
}

impl DropOutcome {
    /// Returns true if the store changed.
    #[must_use]
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved(_))
    }
}

/// Computes the sequence after moving `id` into `column` at `target`.
///
/// The card is removed first, then `target` is resolved against the
/// remaining cards; a target that is missing after removal appends the card
/// to the end. Returns `None` if `id` is not in `cards` or if `target` is the
/// slot directly above the card itself.
///
/// # Examples
///
/// ```
/// use swimlane_protocol::{Card, ColumnId, InsertionPoint, CardId, reorder};
///
/// let cards = vec![
///     Card::with_id("a", "A", ColumnId::Todo),
///     Card::with_id("b", "B", ColumnId::Todo),
/// ];
/// let next = reorder(&cards, &CardId::new("b"), ColumnId::Todo, &InsertionPoint::Before(CardId::new("a")))
///     .unwrap();
/// assert_eq!(next[0].id.as_str(), "b");
/// ```
#[must_use]
pub fn reorder(
    cards: &[Card],
    id: &CardId,
    column: ColumnId,
    target: &InsertionPoint,
) -> Option<Vec<Card>> {
    if target.before() == Some(id) {
        return None;
    }
    let position = cards.iter().position(|card| &card.id == id)?;

    let mut next = cards.to_vec();
    let moved = next.remove(position).moved_to(column);

    let insert_at = target
        .before()
        .and_then(|before| next.iter().position(|card| &card.id == before))
        .unwrap_or(next.len());
    next.insert(insert_at, moved);

    Some(next)
}

/// Handles a drop on `column` at `target`.
///
/// The dragged id comes from the payload and is only honored while the
/// session is dragging. Dropping a card on the slot directly above itself
/// changes nothing. Whatever the outcome, the session returns to idle and the
/// payload is cleared.
pub fn handle_drop(
    store: &mut CardStore,
    session: &mut DragSession,
    payload: &mut DragPayload,
    column: ColumnId,
    target: &InsertionPoint,
) -> DropOutcome {
    let dragged = payload.card_id().filter(|_| session.is_active());
    session.finish();
    payload.clear();

    let Some(card_id) = dragged else {
        debug!("drop ignored: no dragged card");
        return DropOutcome::NoDraggedCard;
    };

    if target.before() == Some(&card_id) {
        debug!(card_id = %card_id, "drop ignored: own slot");
        return DropOutcome::OwnSlot;
    }

    if store.move_card(&card_id, column, target) {
        DropOutcome::Moved(card_id)
    } else {
        DropOutcome::CardMissing(card_id)
    }
}

/// Handles a drop on the burn barrel by deleting the dragged card.
///
/// Returns the deleted card's id. As with [`handle_drop`], the session and
/// payload are reset regardless.
pub fn discard_drop(
    store: &mut CardStore,
    session: &mut DragSession,
    payload: &mut DragPayload,
) -> Option<CardId> {
    let dragged = payload.card_id().filter(|_| session.is_active());
    session.finish();
    payload.clear();

    let card_id = dragged?;
    store.remove(&card_id).then_some(card_id)
}
