//! Add-card form overlay.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::help::centered_rect;
use crate::form::{CardForm, FormField};
use crate::palette::{Palette, column_color};

const FORM_WIDTH: u16 = 50;
const FORM_HEIGHT: u16 = 9;

/// Renders the add form centered over `area`.
///
/// ```text
/// ╭ Add card to Todo ──────────────────────────────╮
/// │                                                │
/// │ Title        Write the release notes▏          │
/// │ Description  optional                          │
/// │                                                │
/// │ Enter add · Tab switch field · Esc cancel      │
/// ╰────────────────────────────────────────────────╯
/// ```
pub fn render_card_form(form: &CardForm, palette: &Palette, area: Rect, buf: &mut Buffer) {
    let popup = centered_rect(FORM_WIDTH, FORM_HEIGHT, area);
    Clear.render(popup, buf);

    let heading = column_color(form.column);
    let block = Block::default()
        .title(Span::styled(
            format!(" Add card to {} ", form.column.display_name()),
            Style::default().fg(heading).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(heading))
        .style(Style::default().bg(palette.background));

    let field_width = usize::from(popup.width.saturating_sub(17));
    let label_style = Style::default().fg(palette.muted);
    let field_line = |label: &'static str, field: FormField, value: &str| {
        let focused = form.field == field;
        let mut spans = vec![Span::styled(format!(" {label:<13}"), label_style)];
        if value.is_empty() && !focused {
            spans.push(Span::styled(
                if field == FormField::Title { "required" } else { "optional" },
                label_style.add_modifier(Modifier::ITALIC),
            ));
        } else {
            // Keep the end of long input visible.
            let shown: String = {
                let count = value.chars().count();
                value.chars().skip(count.saturating_sub(field_width)).collect()
            };
            let style = if focused {
                Style::default().fg(palette.text).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.text)
            };
            spans.push(Span::styled(shown, style));
            if focused {
                spans.push(Span::styled("▏", Style::default().fg(palette.focus)));
            }
        }
        Line::from(spans)
    };

    let key_style = Style::default().fg(palette.accent);
    let lines = vec![
        Line::from(""),
        field_line("Title", FormField::Title, &form.title),
        field_line("Description", FormField::Description, &form.description),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Enter", key_style),
            Span::styled(" add · ", label_style),
            Span::styled("Tab", key_style),
            Span::styled(" switch field · ", label_style),
            Span::styled("Esc", key_style),
            Span::styled(" cancel", label_style),
        ]),
    ];

    Paragraph::new(lines).block(block).render(popup, buf);
}
