//! Drop slot indicator.
//!
//! Every slot in a column is a one-row line. It stays blank until a drag
//! hovers the column; the slot chosen for the pointer is then drawn faintly,
//! and brightly once the pointer is within the highlight radius.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::palette::Palette;

/// Visibility of a drop slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndicatorState {
    /// Not the drop target.
    #[default]
    Hidden,
    /// The drop target, but the pointer is still far from it.
    Faint,
    /// The drop target, with the pointer close by.
    Emphasized,
}

impl IndicatorState {
    /// Returns the state for a slot given whether it was chosen and whether
    /// the choice is emphasized.
    #[must_use]
    pub const fn of(chosen: bool, emphasized: bool) -> Self {
        match (chosen, emphasized) {
            (false, _) => Self::Hidden,
            (true, false) => Self::Faint,
            (true, true) => Self::Emphasized,
        }
    }
}

/// Renders a drop slot indicator across `area`.
pub fn render_drop_indicator(state: IndicatorState, palette: &Palette, area: Rect, buf: &mut Buffer) {
    if area.is_empty() {
        return;
    }

    let (symbol, style) = match state {
        IndicatorState::Hidden => return,
        IndicatorState::Faint => (
            "╌",
            Style::default()
                .fg(palette.indicator)
                .add_modifier(Modifier::DIM),
        ),
        IndicatorState::Emphasized => (
            "━",
            Style::default()
                .fg(palette.indicator)
                .add_modifier(Modifier::BOLD),
        ),
    };

    for x in area.left()..area.right() {
        if let Some(cell) = buf.cell_mut((x, area.y)) {
            cell.set_symbol(symbol).set_style(style);
        }
    }
}
