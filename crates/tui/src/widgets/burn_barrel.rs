//! Burn barrel widget: the drop target that deletes cards.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::palette::Palette;

/// Renders the burn barrel.
///
/// `active` is true while a dragged card hovers the barrel; the barrel is
/// then drawn with a thick border in the danger color.
pub fn render_burn_barrel(active: bool, palette: &Palette, area: Rect, buf: &mut Buffer) {
    let (border_type, border_style, text, text_style) = if active {
        (
            BorderType::Thick,
            Style::default().fg(palette.danger),
            "Release to delete",
            Style::default()
                .fg(palette.danger)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            BorderType::Rounded,
            Style::default().fg(palette.border),
            "Drop to delete",
            Style::default().fg(palette.muted),
        )
    };

    let block = Block::default()
        .title(Span::styled(" Burn barrel ", border_style))
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);

    let lines = vec![
        Line::from(Span::styled(if active { "🔥" } else { "🗑" }, text_style)),
        Line::from(Span::styled(text, text_style)),
    ];

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block)
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use swimlane_config::Theme;

    #[test]
    fn idle_barrel() {
        let palette = Palette::for_theme(Theme::Dark);
        let area = Rect::new(0, 0, 20, 4);
        let mut buf = Buffer::empty(area);

        render_burn_barrel(false, &palette, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Burn barrel"));
        assert!(content.contains("Drop to delete"));
        assert_eq!(buf[(0, 0)].fg, palette.border);
    }

    #[test]
    fn hovered_barrel_is_highlighted() {
        let palette = Palette::for_theme(Theme::Dark);
        let area = Rect::new(0, 0, 20, 4);
        let mut buf = Buffer::empty(area);

        render_burn_barrel(true, &palette, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Release to delete"));
        assert_eq!(buf[(0, 0)].symbol(), "┏");
        assert_eq!(buf[(0, 0)].fg, palette.danger);
    }
}
