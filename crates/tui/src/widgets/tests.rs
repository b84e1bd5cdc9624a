//! Rendering tests that combine several widgets.

use ratatui::{buffer::Buffer, layout::Rect, style::Modifier};
use swimlane_config::Theme;
use swimlane_protocol::{Card, CardId, CardStore, ColumnId, Distribution, HoverTarget};

use super::{BoardView, render_board, render_burn_barrel, render_distribution};
use crate::geometry::BoardGeometry;
use crate::palette::{Palette, column_color};
use crate::test_utils::buffer_to_string;

/// Creates a sample board with cards spread over several columns.
fn create_sample_store() -> CardStore {
    CardStore::from_cards(vec![
        Card::with_id("1", "Design mockups", ColumnId::Backlog)
            .with_description("Wireframes for the board"),
        Card::with_id("2", "Write specs", ColumnId::Backlog),
        Card::with_id("3", "Parser", ColumnId::Doing).with_description("JSON5 config"),
        Card::with_id("4", "Review auth", ColumnId::InProgress),
        Card::with_id("5", "Setup CI", ColumnId::Done),
        Card::with_id("6", "Fix login", ColumnId::Done),
    ])
}

fn board_view<'a>(store: &'a CardStore, palette: &'a Palette) -> BoardView<'a> {
    BoardView {
        store,
        palette,
        selected_column: ColumnId::Backlog,
        selected_card: None,
        dragged: None,
        hover: None,
    }
}

#[test]
fn board_shows_every_card_in_its_column() {
    let store = create_sample_store();
    let palette = Palette::for_theme(Theme::Dark);
    let area = Rect::new(0, 0, 132, 24);
    let geometry = BoardGeometry::compute(&store, area, None);
    let mut buf = Buffer::empty(area);

    render_board(&geometry, &board_view(&store, &palette), &mut buf);

    let content = buffer_to_string(&buf);
    for title in [
        "Backlog (2)",
        "Todo (0)",
        "Doing (1)",
        "Active (0)",
        "In progress (1)",
        "Done (2)",
    ] {
        assert!(content.contains(title), "missing {title}");
    }

    for card in store.snapshot() {
        let column = geometry.column(card.column).unwrap();
        let drawn = column.cards.iter().find(|c| c.id == card.id).unwrap();
        assert!(column.area.contains(drawn.area.as_position()));
    }
}

#[test]
fn selected_card_is_highlighted_only_in_focused_column() {
    let store = create_sample_store();
    let palette = Palette::for_theme(Theme::Dark);
    let area = Rect::new(0, 0, 132, 24);
    let geometry = BoardGeometry::compute(&store, area, Some((ColumnId::Done, 1)));
    let mut view = board_view(&store, &palette);
    view.selected_column = ColumnId::Done;
    view.selected_card = Some(1);
    let mut buf = Buffer::empty(area);

    render_board(&geometry, &view, &mut buf);

    let done = geometry.column(ColumnId::Done).unwrap();
    let selected = &done.cards[1];
    let other = &done.cards[0];
    assert_eq!(buf[(selected.area.x, selected.area.y)].fg, palette.focus);
    assert_eq!(buf[(other.area.x, other.area.y)].fg, palette.border);

    let backlog = geometry.column(ColumnId::Backlog).unwrap();
    let first = &backlog.cards[1];
    assert_eq!(buf[(first.area.x, first.area.y)].fg, palette.border);
}

#[test]
fn drag_in_progress() {
    let store = create_sample_store();
    let palette = Palette::for_theme(Theme::Dark);
    let area = Rect::new(0, 0, 132, 24);
    let geometry = BoardGeometry::compute(&store, area, None);
    let dragged = CardId::new("1");
    let mut view = board_view(&store, &palette);
    view.dragged = Some(&dragged);
    view.hover = Some(HoverTarget::Column {
        column: ColumnId::Done,
        slot: 2,
        emphasized: false,
    });
    let mut buf = Buffer::empty(area);

    render_board(&geometry, &view, &mut buf);

    // The dragged card stays in place, faded.
    let source = &geometry.column(ColumnId::Backlog).unwrap().cards[0];
    assert!(
        buf[(source.area.x + 1, source.area.y + 1)]
            .modifier
            .contains(Modifier::DIM)
    );

    // The hovered column shows the chosen slot and takes its heading color.
    let done = geometry.column(ColumnId::Done).unwrap();
    let end_slot = &done.slots[2];
    assert_eq!(buf[(end_slot.area.x, end_slot.area.y)].symbol(), "╌");
    assert_eq!(
        buf[(done.area.x, done.area.y + 1)].fg,
        column_color(ColumnId::Done)
    );
}

#[test]
fn themes_render_with_their_palettes() {
    let store = create_sample_store();
    let area = Rect::new(0, 0, 132, 24);
    let geometry = BoardGeometry::compute(&store, area, None);

    for theme in [Theme::Light, Theme::Dark] {
        let palette = Palette::for_theme(theme);
        let mut buf = Buffer::empty(area);
        render_board(&geometry, &board_view(&store, &palette), &mut buf);

        let card = &geometry.column(ColumnId::Doing).unwrap().cards[0];
        assert_eq!(buf[(card.area.x + 1, card.area.y + 1)].fg, palette.text);
    }
}

#[test]
fn footer_widgets_side_by_side() {
    let store = create_sample_store();
    let palette = Palette::for_theme(Theme::Dark);
    let area = Rect::new(0, 0, 132, 4);
    let distribution = Distribution::from_cards(store.snapshot(), &ColumnId::all());
    let mut buf = Buffer::empty(area);

    render_distribution(&distribution, &palette, Rect::new(0, 0, 112, 4), &mut buf);
    render_burn_barrel(false, &palette, Rect::new(112, 0, 20, 4), &mut buf);

    let content = buffer_to_string(&buf);
    assert!(content.contains("Distribution (6 cards)"));
    assert!(content.contains("Backlog 33%"));
    assert!(content.contains("Done 33%"));
    assert!(content.contains("Doing 17%"));
    assert!(content.contains("Burn barrel"));
}
