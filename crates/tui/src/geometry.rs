//! Board geometry: where every card, drop slot and add row sits on screen.
//!
//! Geometry is computed from the card store and the board area before
//! rendering and kept by the app for hit-testing and drop location. Each
//! column is laid out top to bottom as:
//!
//! ```text
//! │─────────────── slot (before card 0)
//! │┌────────────┐
//! ││ Card 0     │  card
//! ││ details    │
//! │└────────────┘
//! │─────────────── slot (before card 1)
//! │┌────────────┐
//! ││ Card 1     │
//! ││            │
//! │└────────────┘
//! │─────────────── slot (end)
//! │+ Add card
//! ```
//!
//! The slots are the drop markers handed to
//! [`nearest_slot`](swimlane_protocol::nearest_slot), with pointer rows used
//! directly as pointer coordinates.

use ratatui::layout::{Constraint, Layout, Position, Rect};
use swimlane_protocol::{CardId, CardStore, ColumnId, InsertionPoint, SlotMarker, nearest_slot};

use crate::layout::{ADD_ROW_HEIGHT, CARD_HEIGHT, SLOT_HEIGHT};
use crate::widgets::column::column_block;

/// Position of a column in the horizontal layout.
///
/// Used to pick which borders to draw, so adjacent columns share a single
/// border line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnPosition {
    /// Leftmost column.
    First,
    /// Any column between the first and the last.
    Middle,
    /// Rightmost column.
    Last,
}

impl ColumnPosition {
    fn of(index: usize, count: usize) -> Self {
        if index == 0 {
            Self::First
        } else if index + 1 == count {
            Self::Last
        } else {
            Self::Middle
        }
    }
}

/// A card visible on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardGeometry {
    /// The card.
    pub id: CardId,
    /// Index of the card within its column.
    pub index: usize,
    /// Where the card is drawn.
    pub area: Rect,
}

/// A drop slot visible on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotGeometry {
    /// Where a drop on this slot inserts the card.
    pub target: InsertionPoint,
    /// The row the slot indicator is drawn on.
    pub area: Rect,
}

impl SlotGeometry {
    /// Returns the slot as a drop marker in pointer coordinates.
    #[must_use]
    pub fn marker(&self) -> SlotMarker {
        SlotMarker::new(
            self.target.clone(),
            f64::from(self.area.y),
            f64::from(self.area.height),
        )
    }
}

/// The drop slot chosen for a pointer row.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotChoice {
    /// Index of the slot within the column.
    pub index: usize,
    /// Where a drop inserts the card.
    pub target: InsertionPoint,
    /// Whether the slot is close enough to the pointer to draw emphasized.
    pub emphasized: bool,
}

/// Layout of one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnGeometry {
    /// The column.
    pub column: ColumnId,
    /// Horizontal position, for border drawing.
    pub position: ColumnPosition,
    /// Outer area, including borders.
    pub area: Rect,
    /// Area inside the borders.
    pub inner: Rect,
    /// Number of cards in the column, including any scrolled out of view.
    pub total: usize,
    /// Index of the first visible card.
    pub scroll_offset: usize,
    /// Visible cards, top to bottom.
    pub cards: Vec<CardGeometry>,
    /// Visible drop slots: one above each visible card, then the trailing slot.
    pub slots: Vec<SlotGeometry>,
    /// The "+ Add card" row.
    pub add_row: Option<Rect>,
}

impl ColumnGeometry {
    fn compute(
        column: ColumnId,
        ids: &[CardId],
        area: Rect,
        position: ColumnPosition,
        selected: Option<usize>,
    ) -> Self {
        let inner = column_block(position).inner(area);
        let available = inner.height.saturating_sub(SLOT_HEIGHT + ADD_ROW_HEIGHT);
        let visible = usize::from(available / (SLOT_HEIGHT + CARD_HEIGHT));
        let scroll_offset = calculate_scroll_offset(selected, ids.len(), visible);

        let mut cards = Vec::new();
        let mut slots = Vec::new();
        let mut y = inner.y;

        for (index, id) in ids.iter().enumerate().skip(scroll_offset).take(visible) {
            slots.push(SlotGeometry {
                target: InsertionPoint::Before(id.clone()),
                area: Rect::new(inner.x, y, inner.width, SLOT_HEIGHT),
            });
            y += SLOT_HEIGHT;
            cards.push(CardGeometry {
                id: id.clone(),
                index,
                area: Rect::new(inner.x, y, inner.width, CARD_HEIGHT),
            });
            y += CARD_HEIGHT;
        }

        // The trailing slot sits before the first card scrolled out below.
        let trailing = ids
            .get(scroll_offset + cards.len())
            .map_or(InsertionPoint::End, |id| InsertionPoint::Before(id.clone()));
        if y + SLOT_HEIGHT <= inner.bottom() {
            slots.push(SlotGeometry {
                target: trailing,
                area: Rect::new(inner.x, y, inner.width, SLOT_HEIGHT),
            });
            y += SLOT_HEIGHT;
        }

        let add_row = (y + ADD_ROW_HEIGHT <= inner.bottom())
            .then(|| Rect::new(inner.x, y, inner.width, ADD_ROW_HEIGHT));

        Self {
            column,
            position,
            area,
            inner,
            total: ids.len(),
            scroll_offset,
            cards,
            slots,
            add_row,
        }
    }

    /// Returns the visible slots as drop markers.
    #[must_use]
    pub fn markers(&self) -> Vec<SlotMarker> {
        self.slots.iter().map(SlotGeometry::marker).collect()
    }

    /// Picks the drop slot for a pointer on `row`.
    ///
    /// `radius` is the emphasis distance in rows. Returns `None` only if the
    /// column is too small to show any slot.
    #[must_use]
    pub fn locate(&self, row: u16, radius: f64) -> Option<SlotChoice> {
        let markers = self.markers();
        let nearest = nearest_slot(&markers, f64::from(row))?;
        Some(SlotChoice {
            index: nearest.index,
            target: nearest.slot.target.clone(),
            emphasized: nearest.is_emphasized(radius),
        })
    }

    /// Returns the visible card at a screen position.
    #[must_use]
    pub fn card_at(&self, position: Position) -> Option<&CardGeometry> {
        self.cards.iter().find(|card| card.area.contains(position))
    }

    /// Number of cards scrolled out of view below.
    #[must_use]
    pub fn hidden_below(&self) -> usize {
        self.total
            .saturating_sub(self.scroll_offset + self.cards.len())
    }
}

/// What lies under a screen position on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardHit {
    /// A card.
    Card {
        /// The card's column.
        column: ColumnId,
        /// Index of the card within its column.
        index: usize,
        /// The card.
        id: CardId,
    },
    /// A column's "+ Add card" row.
    AddCard(ColumnId),
    /// Any other part of a column.
    Column(ColumnId),
}

/// Layout of the whole board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardGeometry {
    /// One entry per column, left to right.
    pub columns: Vec<ColumnGeometry>,
}

impl BoardGeometry {
    /// Lays out `store` in `area`.
    ///
    /// `selection` keeps the selected card of that column scrolled into view.
    #[must_use]
    pub fn compute(store: &CardStore, area: Rect, selection: Option<(ColumnId, usize)>) -> Self {
        let all = ColumnId::all();
        let constraints = all.map(|_| Constraint::Ratio(1, ColumnId::COUNT as u32));
        let areas = Layout::horizontal(constraints).split(area);

        let columns = all
            .iter()
            .zip(areas.iter())
            .enumerate()
            .map(|(i, (&column, &column_area))| {
                let ids: Vec<CardId> = store.cards_in(column).map(|c| c.id.clone()).collect();
                let selected = selection
                    .filter(|(selected_column, _)| *selected_column == column)
                    .map(|(_, index)| index);
                ColumnGeometry::compute(
                    column,
                    &ids,
                    column_area,
                    ColumnPosition::of(i, ColumnId::COUNT),
                    selected,
                )
            })
            .collect();

        Self { columns }
    }

    /// Returns the geometry of `column`.
    #[must_use]
    pub fn column(&self, column: ColumnId) -> Option<&ColumnGeometry> {
        self.columns.iter().find(|geometry| geometry.column == column)
    }

    /// Returns the column under a screen position.
    #[must_use]
    pub fn column_at(&self, x: u16, y: u16) -> Option<&ColumnGeometry> {
        let position = Position::new(x, y);
        self.columns
            .iter()
            .find(|geometry| geometry.area.contains(position))
    }

    /// Hit-tests a screen position.
    #[must_use]
    pub fn hit(&self, x: u16, y: u16) -> Option<BoardHit> {
        let position = Position::new(x, y);
        let geometry = self.column_at(x, y)?;

        if let Some(card) = geometry.card_at(position) {
            return Some(BoardHit::Card {
                column: geometry.column,
                index: card.index,
                id: card.id.clone(),
            });
        }
        if geometry.add_row.is_some_and(|row| row.contains(position)) {
            return Some(BoardHit::AddCard(geometry.column));
        }
        Some(BoardHit::Column(geometry.column))
    }
}

/// Calculates the scroll offset that keeps the selected card visible.
pub(crate) fn calculate_scroll_offset(
    selected_idx: Option<usize>,
    total_cards: usize,
    visible_cards: usize,
) -> usize {
    let Some(selected) = selected_idx else {
        return 0;
    };

    if total_cards <= visible_cards || visible_cards == 0 {
        return 0;
    }

    let max_offset = total_cards - visible_cards;
    selected.saturating_sub(visible_cards / 2).min(max_offset)
}
