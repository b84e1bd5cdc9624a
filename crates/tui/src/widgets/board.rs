//! Board rendering widget.
//!
//! This module renders all six columns side by side from a precomputed
//! [`BoardGeometry`].

use ratatui::buffer::Buffer;
use swimlane_protocol::{CardId, CardStore, ColumnId, HoverTarget};

use super::column::{ColumnView, render_column};
use crate::geometry::BoardGeometry;
use crate::palette::Palette;

/// Rendering inputs shared by every column.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    /// The cards.
    pub store: &'a CardStore,
    /// Active colors.
    pub palette: &'a Palette,
    /// The column holding the keyboard selection.
    pub selected_column: ColumnId,
    /// The selected card index within `selected_column`.
    pub selected_card: Option<usize>,
    /// The card being dragged, if any.
    pub dragged: Option<&'a CardId>,
    /// What the drag is hovering, if anything.
    pub hover: Option<HoverTarget>,
}

/// Renders the board to the buffer.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use swimlane_config::Theme;
/// use swimlane_protocol::{CardStore, ColumnId};
/// use swimlane_tui::geometry::BoardGeometry;
/// use swimlane_tui::palette::Palette;
/// use swimlane_tui::widgets::{BoardView, render_board};
///
/// let mut store = CardStore::new();
/// store.add("Example", ColumnId::Backlog);
///
/// let area = Rect::new(0, 0, 120, 20);
/// let geometry = BoardGeometry::compute(&store, area, None);
/// let palette = Palette::for_theme(Theme::Dark);
/// let view = BoardView {
///     store: &store,
///     palette: &palette,
///     selected_column: ColumnId::Backlog,
///     selected_card: Some(0),
///     dragged: None,
///     hover: None,
/// };
/// let mut buf = Buffer::empty(area);
///
/// render_board(&geometry, &view, &mut buf);
/// ```
pub fn render_board(geometry: &BoardGeometry, view: &BoardView<'_>, buf: &mut Buffer) {
    let mut prev_focused = false;

    for column in &geometry.columns {
        let focused = column.column == view.selected_column;
        let hover_slot = match view.hover {
            Some(HoverTarget::Column {
                column: hovered,
                slot,
                emphasized,
            }) if hovered == column.column => Some((slot, emphasized)),
            _ => None,
        };

        let column_view = ColumnView {
            store: view.store,
            palette: view.palette,
            focused,
            prev_focused,
            selected: if focused { view.selected_card } else { None },
            dragged: view.dragged,
            hover_slot,
        };
        render_column(column, &column_view, buf);

        prev_focused = focused;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use ratatui::layout::Rect;
    use swimlane_config::Theme;

    #[test]
    fn all_columns_rendered_in_order() {
        let store = CardStore::new();
        let palette = Palette::for_theme(Theme::Light);
        let area = Rect::new(0, 0, 120, 12);
        let geometry = BoardGeometry::compute(&store, area, None);
        let view = BoardView {
            store: &store,
            palette: &palette,
            selected_column: ColumnId::Backlog,
            selected_card: None,
            dragged: None,
            hover: None,
        };
        let mut buf = Buffer::empty(area);

        render_board(&geometry, &view, &mut buf);

        let content = buffer_to_string(&buf);
        let header = content.lines().next().unwrap();
        let positions: Vec<usize> = ColumnId::all()
            .iter()
            .map(|c| header.find(&format!("{} (0)", c.display_name())).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn hover_only_marks_hovered_column() {
        let mut store = CardStore::new();
        store.add("One", ColumnId::Todo);
        store.add("Two", ColumnId::Doing);
        let palette = Palette::for_theme(Theme::Dark);
        let area = Rect::new(0, 0, 120, 20);
        let geometry = BoardGeometry::compute(&store, area, None);
        let view = BoardView {
            store: &store,
            palette: &palette,
            selected_column: ColumnId::Backlog,
            selected_card: None,
            dragged: None,
            hover: Some(HoverTarget::Column {
                column: ColumnId::Doing,
                slot: 0,
                emphasized: true,
            }),
        };
        let mut buf = Buffer::empty(area);

        render_board(&geometry, &view, &mut buf);

        let todo = geometry.column(ColumnId::Todo).unwrap();
        let doing = geometry.column(ColumnId::Doing).unwrap();
        assert_eq!(buf[(todo.slots[0].area.x, todo.slots[0].area.y)].symbol(), " ");
        assert_eq!(buf[(doing.slots[0].area.x, doing.slots[0].area.y)].symbol(), "━");
    }
}
