//! Card rendering widget.
//!
//! This module renders a single card: a bordered box with the title on the
//! first line and the description, truncated to one line, on the second.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use swimlane_protocol::Card;

use crate::palette::Palette;

/// How a card is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardLook {
    /// Plain card.
    #[default]
    Normal,
    /// The keyboard or click selection.
    Selected,
    /// The card being dragged; drawn faded in its old position.
    Dragged,
}

/// Renders a card to the buffer.
///
/// # Layout
///
/// ```text
/// ╭────────────────╮
/// │Title           │
/// │description...  │
/// ╰────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use swimlane_config::Theme;
/// use swimlane_protocol::{Card, ColumnId};
/// use swimlane_tui::palette::Palette;
/// use swimlane_tui::widgets::{CardLook, render_card};
///
/// let card = Card::new("Write docs", ColumnId::Todo).with_description("README first");
/// let area = Rect::new(0, 0, 20, 4);
/// let mut buf = Buffer::empty(area);
///
/// render_card(&card, CardLook::Normal, &Palette::for_theme(Theme::Dark), area, &mut buf);
/// ```
pub fn render_card(card: &Card, look: CardLook, palette: &Palette, area: Rect, buf: &mut Buffer) {
    // Skip rendering if area is too small
    if area.width < 4 || area.height < 3 {
        return;
    }

    let (border_style, title_style, desc_style) = match look {
        CardLook::Normal => (
            Style::default().fg(palette.border),
            Style::default().fg(palette.text),
            Style::default().fg(palette.muted),
        ),
        CardLook::Selected => (
            Style::default().fg(palette.focus),
            Style::default()
                .fg(palette.focus)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(palette.text),
        ),
        CardLook::Dragged => {
            let faded = Style::default()
                .fg(palette.muted)
                .add_modifier(Modifier::DIM);
            (faded, faded, faded)
        }
    };

    let inner_width = usize::from(area.width.saturating_sub(2));
    let description = card.description.as_deref().unwrap_or_default();

    let content = vec![
        Line::from(Span::styled(
            truncate_string(&card.title, inner_width),
            title_style,
        )),
        Line::from(Span::styled(
            truncate_string(description, inner_width),
            desc_style,
        )),
    ];

    let border_type = if look == CardLook::Dragged {
        BorderType::Plain
    } else {
        BorderType::Rounded
    };

    Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(border_style),
        )
        .render(area, buf);
}

/// Truncates a string to fit within a given width, adding ellipsis if needed.
pub(crate) fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width > 3 {
        let truncated: String = s.chars().take(max_width - 3).collect();
        format!("{truncated}...")
    } else {
        s.chars().take(max_width).collect()
    }
}
