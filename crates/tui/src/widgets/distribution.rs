//! Distribution summary widget.
//!
//! Shows how the cards are spread over the columns: a stacked bar with one
//! colored segment per non-empty column, and a legend with the rounded
//! percentage of every column.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use swimlane_protocol::{ColumnId, Distribution};

use crate::palette::{Palette, column_color};

/// Splits `width` cells among the non-empty columns in proportion to their
/// counts.
///
/// Uses largest remainders so the segments always fill the bar exactly.
/// Returns no segments for an empty board.
pub(crate) fn bar_segments(distribution: &Distribution, width: u16) -> Vec<(ColumnId, u16)> {
    let total = distribution.total();
    let slices: Vec<_> = distribution.slices().collect();
    if total == 0 || width == 0 || slices.is_empty() {
        return Vec::new();
    }

    let width = usize::from(width);
    let mut segments: Vec<(ColumnId, usize, usize)> = slices
        .iter()
        .map(|share| {
            let exact = share.count * width;
            (share.column, exact / total, exact % total)
        })
        .collect();

    let assigned: usize = segments.iter().map(|(_, cells, _)| cells).sum();
    let mut leftover = width.saturating_sub(assigned);

    let mut by_remainder: Vec<usize> = (0..segments.len()).collect();
    by_remainder.sort_by(|&a, &b| segments[b].2.cmp(&segments[a].2).then(a.cmp(&b)));
    for index in by_remainder {
        if leftover == 0 {
            break;
        }
        segments[index].1 += 1;
        leftover -= 1;
    }

    segments
        .into_iter()
        .map(|(column, cells, _)| (column, u16::try_from(cells).unwrap_or(u16::MAX)))
        .collect()
}

/// Renders the distribution summary.
///
/// # Layout
///
/// ```text
/// ╭ Distribution (3 cards) ──────────────────────────╮
/// │████████████████▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓│
/// │■ Backlog 33%  ■ Todo 67%  ■ Doing 0%  ...       │
/// ╰──────────────────────────────────────────────────╯
/// ```
pub fn render_distribution(
    distribution: &Distribution,
    palette: &Palette,
    area: Rect,
    buf: &mut Buffer,
) {
    let total = distribution.total();
    let noun = if total == 1 { "card" } else { "cards" };
    let block = Block::default()
        .title(Span::styled(
            format!(" Distribution ({total} {noun}) "),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border));

    let inner = block.inner(area);
    block.render(area, buf);
    if inner.is_empty() {
        return;
    }

    let [bar_area, legend_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);

    if total == 0 {
        Paragraph::new(Span::styled(
            "No cards yet",
            Style::default()
                .fg(palette.muted)
                .add_modifier(Modifier::ITALIC),
        ))
        .render(bar_area, buf);
    } else {
        let mut x = bar_area.x;
        for (column, cells) in bar_segments(distribution, bar_area.width) {
            let style = Style::default().fg(column_color(column));
            for _ in 0..cells {
                if let Some(cell) = buf.cell_mut((x, bar_area.y)) {
                    cell.set_symbol("█").set_style(style);
                }
                x += 1;
            }
        }
    }

    let legend: Vec<Span<'_>> = distribution
        .shares()
        .iter()
        .flat_map(|share| {
            [
                Span::styled("■ ", Style::default().fg(column_color(share.column))),
                Span::styled(
                    format!(
                        "{} {}%  ",
                        share.column.display_name(),
                        distribution.rounded_percent(share.column)
                    ),
                    Style::default().fg(palette.text),
                ),
            ]
        })
        .collect();
    Paragraph::new(Line::from(legend)).render(legend_area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use swimlane_config::Theme;
    use swimlane_protocol::Card;

    fn distribution(cards: &[ColumnId]) -> Distribution {
        let cards: Vec<Card> = cards
            .iter()
            .enumerate()
            .map(|(i, column)| Card::with_id(format!("c{i}"), "Card", *column))
            .collect();
        Distribution::from_cards(&cards, &ColumnId::all())
    }

    #[test]
    fn segments_fill_the_bar() {
        let dist = distribution(&[ColumnId::Backlog, ColumnId::Todo, ColumnId::Todo]);
        let segments = bar_segments(&dist, 10);

        assert_eq!(segments, vec![(ColumnId::Backlog, 3), (ColumnId::Todo, 7)]);
    }

    #[test]
    fn remainder_goes_to_largest_fraction_then_first() {
        let dist = distribution(&[ColumnId::Backlog, ColumnId::Doing, ColumnId::Done]);
        let segments = bar_segments(&dist, 10);

        let widths: Vec<u16> = segments.iter().map(|(_, w)| *w).collect();
        assert_eq!(widths, vec![4, 3, 3]);
    }

    #[test]
    fn empty_board_has_no_segments() {
        let dist = distribution(&[]);
        assert!(bar_segments(&dist, 40).is_empty());
    }

    #[test]
    fn legend_lists_every_column_with_rounded_percent() {
        let dist = distribution(&[ColumnId::Backlog, ColumnId::Todo, ColumnId::Todo]);
        let area = Rect::new(0, 0, 140, 4);
        let mut buf = Buffer::empty(area);

        render_distribution(&dist, &Palette::for_theme(Theme::Dark), area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Distribution (3 cards)"));
        assert!(content.contains("Backlog 33%"));
        assert!(content.contains("Todo 67%"));
        assert!(content.contains("Done 0%"));
        assert!(content.contains("In progress 0%"));
    }

    #[test]
    fn empty_board_shows_placeholder() {
        let dist = distribution(&[]);
        let area = Rect::new(0, 0, 140, 4);
        let mut buf = Buffer::empty(area);

        render_distribution(&dist, &Palette::for_theme(Theme::Dark), area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("No cards yet"));
        assert!(content.contains("Backlog 0%"));
    }

    #[test]
    fn bar_uses_column_colors() {
        let dist = distribution(&[ColumnId::Done]);
        let area = Rect::new(0, 0, 60, 4);
        let mut buf = Buffer::empty(area);

        render_distribution(&dist, &Palette::for_theme(Theme::Dark), area, &mut buf);

        assert_eq!(buf[(1, 1)].symbol(), "█");
        assert_eq!(buf[(1, 1)].fg, column_color(ColumnId::Done));
        assert_eq!(buf[(58, 1)].fg, column_color(ColumnId::Done));
    }
}
