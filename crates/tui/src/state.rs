//! Application state management.
//!
//! This module defines the core state structures for the TUI application:
//! the card store, selection tracking, the add form, and the in-progress
//! drag gesture.

use swimlane_config::Theme;
use swimlane_protocol::{Card, CardId, CardStore, ColumnId, DragPayload, DragSession};

use crate::form::CardForm;

/// The current focus area in the UI.
///
/// Determines which UI component receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Focus is on the board columns.
    #[default]
    Board,
    /// Focus is on the add-card form.
    Form,
}

/// A mouse press that has not yet turned into a click or a drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Press {
    /// Pressed on a card.
    Card {
        /// The pressed card.
        id: CardId,
        /// Its column.
        column: ColumnId,
        /// Its index within the column.
        index: usize,
    },
    /// Pressed on a column's "+ Add card" row.
    AddCard(ColumnId),
}

/// The application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Every card on the board.
    pub store: CardStore,
    /// The active color theme.
    pub theme: Theme,
    /// Current focus area.
    pub focus: Focus,
    /// Index of the selected column (0-5).
    pub selected_column: usize,
    /// Index of the selected card within the selected column, if any.
    pub selected_card: Option<usize>,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// The open add-card form, if any.
    pub form: Option<CardForm>,
    /// The drag gesture in progress.
    pub drag: DragSession,
    /// Data carried by the drag gesture.
    pub payload: DragPayload,
    /// Pending mouse press.
    pub press: Option<Press>,
    /// Message shown in the status line.
    pub status: Option<String>,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Examples
    ///
    /// ```
    /// use swimlane_config::Theme;
    /// use swimlane_protocol::CardStore;
    /// use swimlane_tui::AppState;
    ///
    /// let state = AppState::new(CardStore::new(), Theme::Dark);
    /// assert_eq!(state.selected_column, 0);
    /// assert!(state.selected_card.is_none());
    /// ```
    #[must_use]
    pub fn new(store: CardStore, theme: Theme) -> Self {
        Self {
            store,
            theme,
            focus: Focus::default(),
            selected_column: 0,
            selected_card: None,
            help_visible: false,
            form: None,
            drag: DragSession::default(),
            payload: DragPayload::default(),
            press: None,
            status: None,
        }
    }

    /// Returns the selected column.
    #[must_use]
    pub fn selected_column_id(&self) -> ColumnId {
        ColumnId::from_index(self.selected_column).unwrap_or_default()
    }

    fn column_len(&self, column: ColumnId) -> usize {
        self.store.cards_in(column).count()
    }

    /// Returns the selected card, if any.
    #[must_use]
    pub fn selected_card(&self) -> Option<&Card> {
        let index = self.selected_card?;
        self.store.cards_in(self.selected_column_id()).nth(index)
    }

    /// Returns the selected column and card index, if a card is selected.
    #[must_use]
    pub fn selection(&self) -> Option<(ColumnId, usize)> {
        self.selected_card
            .map(|index| (self.selected_column_id(), index))
    }

    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay if it is visible.
    ///
    /// Returns `true` if help was visible and has been dismissed.
    #[must_use]
    pub fn dismiss_help(&mut self) -> bool {
        std::mem::replace(&mut self.help_visible, false)
    }

    /// Moves the column selection to the left, wrapping around if needed.
    pub fn navigate_left(&mut self) {
        self.selected_column = self
            .selected_column
            .checked_sub(1)
            .unwrap_or(ColumnId::COUNT - 1);
        self.clamp_card_selection();
    }

    /// Moves the column selection to the right, wrapping around if needed.
    pub fn navigate_right(&mut self) {
        self.selected_column = (self.selected_column + 1) % ColumnId::COUNT;
        self.clamp_card_selection();
    }

    /// Moves the card selection up within the current column, wrapping to
    /// the bottom.
    pub fn navigate_up(&mut self) {
        let len = self.column_len(self.selected_column_id());
        self.selected_card = match (len, self.selected_card) {
            (0, _) => None,
            (_, Some(idx)) if idx > 0 => Some(idx - 1),
            (_, Some(_)) => Some(len - 1),
            (_, None) => Some(0),
        };
    }

    /// Moves the card selection down within the current column, wrapping to
    /// the top.
    pub fn navigate_down(&mut self) {
        let len = self.column_len(self.selected_column_id());
        self.selected_card = match (len, self.selected_card) {
            (0, _) => None,
            (_, Some(idx)) if idx + 1 < len => Some(idx + 1),
            (_, _) => Some(0),
        };
    }

    /// Keeps the card selection within the bounds of the current column.
    pub fn clamp_card_selection(&mut self) {
        let len = self.column_len(self.selected_column_id());
        self.selected_card = match self.selected_card {
            _ if len == 0 => None,
            Some(idx) => Some(idx.min(len - 1)),
            None => None,
        };
    }

    /// Clears the card selection, keeping the selected column.
    pub fn clear_selection(&mut self) {
        self.selected_card = None;
    }

    /// Selects a card by id, moving the column selection to its column.
    ///
    /// Returns false if the card is not on the board.
    pub fn select_card(&mut self, id: &CardId) -> bool {
        let Some(column) = self.store.get(id).map(|card| card.column) else {
            return false;
        };
        let Some(index) = self.store.cards_in(column).position(|card| &card.id == id) else {
            return false;
        };
        self.selected_column = column.index();
        self.selected_card = Some(index);
        true
    }

    /// Opens the add form for `column`.
    pub fn open_form(&mut self, column: ColumnId) {
        self.selected_column = column.index();
        self.form = Some(CardForm::new(column));
        self.focus = Focus::Form;
    }

    /// Closes the add form, if open.
    pub fn close_form(&mut self) {
        self.form = None;
        self.focus = Focus::Board;
    }

    /// Sets the status line message.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }
}
