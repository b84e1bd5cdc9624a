//! Centralized layout measurements for the TUI.
//!
//! This module defines the shared constants for layout dimensions and splits
//! the terminal into its fixed screen regions. Rendering and mouse
//! hit-testing both go through [`ScreenLayout::compute`], so a click always
//! lands on what was drawn.

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the header bar in rows.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of each card in rows: border (2 rows) plus title and description.
pub const CARD_HEIGHT: u16 = 4;

/// Height of the drop slot drawn above each card and after the last one.
pub const SLOT_HEIGHT: u16 = 1;

/// Height of the "+ Add card" row at the bottom of each column.
pub const ADD_ROW_HEIGHT: u16 = 1;

/// Height of the footer holding the distribution summary and burn barrel.
pub const FOOTER_HEIGHT: u16 = 4;

/// Height of the one-line status message.
pub const STATUS_HEIGHT: u16 = 1;

/// Width of the burn barrel drop target.
pub const BURN_BARREL_WIDTH: u16 = 20;

/// Smallest board area that still shows one card per column:
/// borders (2), a slot, a card, the end slot and the add row.
pub const MIN_BOARD_HEIGHT: u16 = 2 + SLOT_HEIGHT + CARD_HEIGHT + SLOT_HEIGHT + ADD_ROW_HEIGHT;

/// Minimum terminal height for useful rendering.
///
/// Below this height, we display a "terminal too small" message.
pub const MIN_HEIGHT: u16 = MIN_BOARD_HEIGHT + FOOTER_HEIGHT + STATUS_HEIGHT;

/// Minimum terminal height for rendering with header.
///
/// When terminal height is between `MIN_HEIGHT` and `MIN_HEIGHT_WITH_HEADER`,
/// we hide the header to reclaim 3 rows of board space.
pub const MIN_HEIGHT_WITH_HEADER: u16 = MIN_HEIGHT + HEADER_HEIGHT;

/// Minimum terminal width for useful rendering.
///
/// The board has 6 columns; each needs about 10 characters for borders and
/// truncated titles to be readable.
pub const MIN_WIDTH: u16 = 60;

/// The fixed regions of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar, hidden when the terminal is short.
    pub header: Option<Rect>,
    /// The six columns.
    pub board: Rect,
    /// Card distribution summary.
    pub distribution: Rect,
    /// Delete drop target.
    pub burn_barrel: Rect,
    /// One-line status message.
    pub status: Rect,
}

impl ScreenLayout {
    /// Splits `area` into screen regions.
    ///
    /// Returns `None` if the area is below the minimum size.
    #[must_use]
    pub fn compute(area: Rect) -> Option<Self> {
        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            return None;
        }

        let header_height = if area.height >= MIN_HEIGHT_WITH_HEADER {
            HEADER_HEIGHT
        } else {
            0
        };

        let [header, board, footer, status] = Layout::vertical([
            Constraint::Length(header_height),
            Constraint::Min(MIN_BOARD_HEIGHT),
            Constraint::Length(FOOTER_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .areas(area);

        let [distribution, burn_barrel] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(BURN_BARREL_WIDTH)])
                .areas(footer);

        Some(Self {
            header: (header_height > 0).then_some(header),
            board,
            distribution,
            burn_barrel,
            status,
        })
    }
}
