//! Column rendering widget.
//!
//! This module renders one board column from its precomputed
//! [`ColumnGeometry`]: the header, the drop slots, the visible cards and the
//! "+ Add card" row.

use ratatui::{
    buffer::Buffer,
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};
use swimlane_protocol::{CardId, CardStore};

use super::card::{CardLook, render_card};
use super::drop_indicator::{IndicatorState, render_drop_indicator};
use crate::geometry::{ColumnGeometry, ColumnPosition};
use crate::palette::{Palette, column_color};

/// Border set for the first (leftmost) column: rounded corners on left, no right border.
const BORDER_SET_FIRST: border::Set = border::Set {
    top_left: "╭",
    top_right: "─",
    bottom_left: "╰",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Border set for middle columns: T-connectors on left, no right border.
const BORDER_SET_MIDDLE: border::Set = border::Set {
    top_left: "┬",
    top_right: "─",
    bottom_left: "┴",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Border set for the last (rightmost) column: T-connectors on left, rounded on right.
const BORDER_SET_LAST: border::Set = border::Set {
    top_left: "┬",
    top_right: "╮",
    bottom_left: "┴",
    bottom_right: "╯",
    vertical_left: "│",
    vertical_right: "│",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Returns the bordered block of a column.
///
/// Adjacent columns share one border line: only the last column draws a
/// right border.
pub(crate) fn column_block(position: ColumnPosition) -> Block<'static> {
    let (borders, border_set) = match position {
        ColumnPosition::First => (Borders::TOP | Borders::BOTTOM | Borders::LEFT, BORDER_SET_FIRST),
        ColumnPosition::Middle => (
            Borders::TOP | Borders::BOTTOM | Borders::LEFT,
            BORDER_SET_MIDDLE,
        ),
        ColumnPosition::Last => (Borders::ALL, BORDER_SET_LAST),
    };
    Block::default().borders(borders).border_set(border_set)
}

/// Per-column rendering inputs.
#[derive(Debug, Clone, Copy)]
pub struct ColumnView<'a> {
    /// Source of the card contents.
    pub store: &'a CardStore,
    /// Active colors.
    pub palette: &'a Palette,
    /// Whether this column has the keyboard selection.
    pub focused: bool,
    /// Whether the column to the left has the keyboard selection.
    pub prev_focused: bool,
    /// Index of the selected card, if in this column.
    pub selected: Option<usize>,
    /// The card being dragged, if any.
    pub dragged: Option<&'a CardId>,
    /// The chosen drop slot and its emphasis, while a drag hovers this column.
    pub hover_slot: Option<(usize, bool)>,
}

/// Renders a column to the buffer.
///
/// # Layout
///
/// ```text
/// ╭Backlog (2)─────
/// │━━━━━━━━━━━━━━━   <- drop slot (visible while dragging)
/// │╭──────────────╮
/// ││Card title    │
/// ││description   │
/// │╰──────────────╯
/// │
/// │╭──────────────╮
/// ││Second card   │
/// ││              │
/// │╰──────────────╯
/// │
/// │+ Add card
/// ╰────────────────
/// ```
pub fn render_column(geometry: &ColumnGeometry, view: &ColumnView<'_>, buf: &mut Buffer) {
    let palette = view.palette;
    let heading = column_color(geometry.column);
    let hovered = view.hover_slot.is_some();

    let border_style = if hovered {
        Style::default().fg(heading)
    } else if view.focused {
        Style::default().fg(palette.focus)
    } else {
        Style::default().fg(palette.border)
    };

    let mut title_style = Style::default().fg(heading);
    if view.focused || hovered {
        title_style = title_style.add_modifier(Modifier::BOLD);
    }
    let title = format!("{} ({})", geometry.column.display_name(), geometry.total);

    let mut block = column_block(geometry.position)
        .title(Span::styled(title, title_style))
        .border_style(border_style);
    let hidden = geometry.hidden_below();
    if hidden > 0 {
        block = block.title_bottom(Span::styled(
            format!("↓ {hidden} more"),
            Style::default().fg(palette.muted),
        ));
    }
    block.render(geometry.area, buf);

    // The left border is shared with the previous column; keep it highlighted
    // while that column is focused.
    if view.prev_focused && !view.focused && !hovered {
        let x = geometry.area.x;
        for y in geometry.area.top()..geometry.area.bottom() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(Style::default().fg(palette.focus));
            }
        }
    }

    for (index, slot) in geometry.slots.iter().enumerate() {
        let state = match view.hover_slot {
            Some((chosen, emphasized)) => IndicatorState::of(chosen == index, emphasized),
            None => IndicatorState::Hidden,
        };
        render_drop_indicator(state, palette, slot.area, buf);
    }

    for card_geometry in &geometry.cards {
        let Some(card) = view.store.get(&card_geometry.id) else {
            continue;
        };
        let look = if view.dragged == Some(&card.id) {
            CardLook::Dragged
        } else if view.focused && view.selected == Some(card_geometry.index) {
            CardLook::Selected
        } else {
            CardLook::Normal
        };
        render_card(card, look, palette, card_geometry.area, buf);
    }

    if let Some(row) = geometry.add_row {
        let add = Line::from(vec![
            Span::styled("+", Style::default().fg(palette.accent)),
            Span::styled(" Add card", Style::default().fg(palette.muted)),
        ]);
        buf.set_line(row.x, row.y, &add, row.width);
    }
}
