//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application state.

use serde::{Deserialize, Serialize};

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the application state to update the UI.
///
/// # Examples
///
/// ```
/// use swimlane_protocol::Message;
///
/// let msg = Message::NavigateRight;
/// assert!(matches!(msg, Message::NavigateRight));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Move selection to the left column.
    NavigateLeft,
    /// Move selection to the right column.
    NavigateRight,
    /// Move selection up within the current column.
    NavigateUp,
    /// Move selection down within the current column.
    NavigateDown,
    /// Escape: cancel a drag, close an overlay, or clear selection (contextual).
    Escape,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,
    /// Switch between the light and dark theme.
    ToggleTheme,
    /// The terminal lost focus; any drag in progress is abandoned.
    FocusLost,

    // --- Card actions ---
    /// Open the add form for the selected column.
    AddCard,
    /// Delete the selected card.
    DeleteCard,
    /// Move the selected card to its next stage.
    AdvanceCard,
    /// Move the selected card directly to Done.
    FinishCard,

    // --- Pointer gestures ---
    /// Left button pressed at (column, row).
    PointerDown {
        /// Column (x coordinate).
        column: u16,
        /// Row (y coordinate).
        row: u16,
    },
    /// Pointer moved with the left button held.
    PointerDrag {
        /// Column (x coordinate).
        column: u16,
        /// Row (y coordinate).
        row: u16,
    },
    /// Left button released at (column, row).
    PointerUp {
        /// Column (x coordinate).
        column: u16,
        /// Row (y coordinate).
        row: u16,
    },

    // --- Add form ---
    /// Type a character into the focused field.
    FormInput {
        /// The character that was typed.
        ch: char,
    },
    /// Delete the last character of the focused field.
    FormBackspace,
    /// Move focus between title and description.
    FormSwitchField,
    /// Create the card.
    FormSubmit,
    /// Close the form without creating a card.
    FormCancel,
}
