//! Shared protocol types for the swimlane application.
//!
//! This crate defines the core types used across all swimlane components:
//! cards and columns, the card store, and the drag-and-drop engine that
//! reorders cards.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`card`]: Card identifiers, columns, and the `Card` struct
//! - [`store`]: The ordered `CardStore`
//! - [`locator`]: Insertion points, slot markers, and nearest-slot selection
//! - [`drag`]: The drag session and its payload
//! - [`reducer`]: Applying a drop to the card sequence
//! - [`distribution`]: Per-column card counts
//! - [`message`]: TUI event messages
//! - [`error`]: Error types for protocol operations
//!
//! # Examples
//!
//! Dragging a card to the top of another column:
//!
//! ```
//! use swimlane_protocol::{
//!     CardStore, ColumnId, DragPayload, DragSession, DropOutcome, InsertionPoint, handle_drop,
//! };
//!
//! let mut store = CardStore::new();
//! let first = store.add("Plan sprint", ColumnId::Todo).unwrap();
//! let dragged = store.add("Fix login", ColumnId::Backlog).unwrap();
//!
//! let mut session = DragSession::default();
//! let mut payload = DragPayload::default();
//! session.start(dragged.clone(), &mut payload);
//!
//! let outcome = handle_drop(
//!     &mut store,
//!     &mut session,
//!     &mut payload,
//!     ColumnId::Todo,
//!     &InsertionPoint::Before(first),
//! );
//!
//! assert_eq!(outcome, DropOutcome::Moved(dragged));
//! let titles: Vec<_> = store.cards_in(ColumnId::Todo).map(|c| c.title.as_str()).collect();
//! assert_eq!(titles, ["Fix login", "Plan sprint"]);
//! ```

pub mod card;
pub mod distribution;
pub mod drag;
pub mod error;
pub mod locator;
pub mod message;
pub mod reducer;
pub mod store;

// Re-export primary types at crate root for convenience
pub use card::{Card, CardId, ColumnId};
pub use distribution::{ColumnShare, Distribution};
pub use drag::{CARD_ID_FIELD, DragPayload, DragSession, DragState, HoverTarget};
pub use error::{ProtocolError, Result};
pub use locator::{
    DEFAULT_HIGHLIGHT_RADIUS, END_MARKER, InsertionPoint, NearestSlot, SlotMarker, nearest_slot,
};
pub use message::Message;
pub use reducer::{DropOutcome, discard_drop, handle_drop, reorder};
pub use store::CardStore;
