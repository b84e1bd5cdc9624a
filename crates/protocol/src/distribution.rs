//! Summary of how cards are spread across columns.

use crate::card::{Card, ColumnId};

/// Number of cards in one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnShare {
    /// The column.
    pub column: ColumnId,
    /// Cards currently in the column.
    pub count: usize,
}

/// Per-column card counts for the board.
///
/// # Examples
///
/// ```
/// use swimlane_protocol::{Card, ColumnId, Distribution};
///
/// let cards = vec![
///     Card::new("A", ColumnId::Todo),
///     Card::new("B", ColumnId::Todo),
///     Card::new("C", ColumnId::Done),
/// ];
/// let distribution = Distribution::from_cards(&cards, &ColumnId::all());
///
/// assert_eq!(distribution.total(), 3);
/// assert_eq!(distribution.slices().count(), 2);
/// assert_eq!(distribution.rounded_percent(ColumnId::Todo), 67);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    shares: Vec<ColumnShare>,
    total: usize,
}

impl Distribution {
    /// Counts `cards` for each of `columns`, keeping the column order.
    ///
    /// The total is the number of cards, including any in columns not listed.
    #[must_use]
    pub fn from_cards(cards: &[Card], columns: &[ColumnId]) -> Self {
        let shares = columns
            .iter()
            .map(|&column| ColumnShare {
                column,
                count: cards.iter().filter(|card| card.column == column).count(),
            })
            .collect();
        Self {
            shares,
            total: cards.len(),
        }
    }

    /// Total number of cards.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Every column with its count, for the legend.
    #[must_use]
    pub fn shares(&self) -> &[ColumnShare] {
        &self.shares
    }

    /// Columns with at least one card, for the chart.
    pub fn slices(&self) -> impl Iterator<Item = &ColumnShare> {
        self.shares.iter().filter(|share| share.count > 0)
    }

    /// Count for one column, or 0 if the column is not listed.
    #[must_use]
    pub fn count(&self, column: ColumnId) -> usize {
        self.shares
            .iter()
            .find(|share| share.column == column)
            .map_or(0, |share| share.count)
    }

    /// Share of the total in `column`, from 0.0 to 100.0.
    ///
    /// An empty board yields 0.0 for every column.
    #[must_use]
    pub fn percent(&self, column: ColumnId) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(column) as f64 / self.total as f64 * 100.0
    }

    /// [`Self::percent`] rounded to the nearest integer.
    #[must_use]
    pub fn rounded_percent(&self, column: ColumnId) -> u32 {
        // Bounded to 0..=100.
        self.percent(column).round() as u32
    }
}
