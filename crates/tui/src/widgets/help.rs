//! Help overlay widget.
//!
//! This module provides the help overlay that displays all available keybindings
//! and mouse gestures when the user presses `?`.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::palette::Palette;

/// The width of the help overlay panel.
const HELP_WIDTH: u16 = 44;

/// The height of the help overlay panel.
const HELP_HEIGHT: u16 = 25;

/// Renders a centered help overlay displaying all keybindings.
///
/// # Layout
///
/// ```text
/// ╭ Help ────────────────────────────────────╮
/// │                                          │
/// │  Mouse                                   │
/// │  Drag card  Move or reorder              │
/// │  ...                                     │
/// │  Keyboard                                │
/// │  ←→↑↓       Select                       │
/// │  ...                                     │
/// │  Press any key to close                  │
/// ╰──────────────────────────────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use swimlane_config::Theme;
/// use swimlane_tui::palette::Palette;
/// use swimlane_tui::widgets::render_help_overlay;
///
/// let area = Rect::new(0, 0, 80, 30);
/// let mut buf = Buffer::empty(area);
///
/// render_help_overlay(&Palette::for_theme(Theme::Dark), area, &mut buf);
/// ```
pub fn render_help_overlay(palette: &Palette, area: Rect, buf: &mut Buffer) {
    let popup_area = centered_rect(HELP_WIDTH, HELP_HEIGHT, area);

    Clear.render(popup_area, buf);

    let help_block = Block::default()
        .title(Span::styled(
            " Help ",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.background));

    Paragraph::new(build_help_lines(palette))
        .block(help_block)
        .alignment(Alignment::Left)
        .render(popup_area, buf);
}

/// Builds the lines of help content.
fn build_help_lines(palette: &Palette) -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(palette.focus);
    let text_style = Style::default().fg(palette.text);
    let hint_style = Style::default()
        .fg(palette.muted)
        .add_modifier(Modifier::ITALIC);

    let entry = |key: &'static str, action: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<11}"), key_style),
            Span::styled(action, text_style),
        ])
    };

    vec![
        Line::from(""),
        Line::from(Span::styled("  Mouse", header_style)),
        entry("Drag card", "Move or reorder"),
        entry("Drop on 🔥", "Delete card"),
        entry("Click card", "Select"),
        entry("+ Add card", "Open add form"),
        Line::from(""),
        Line::from(Span::styled("  Keyboard", header_style)),
        entry("←→↑↓", "Select column / card"),
        entry("a", "Add card"),
        entry("d / Del", "Delete card"),
        entry("n", "Move to next stage"),
        entry("f", "Move to Done"),
        entry("t", "Toggle light/dark theme"),
        entry("Esc", "Cancel drag / clear"),
        entry("Ctrl+C", "Quit"),
        entry("?", "Toggle help"),
        Line::from(""),
        Line::from(Span::styled("  Add form", header_style)),
        entry("Tab", "Title / description"),
        entry("Enter", "Add   Esc  Cancel"),
        Line::from(""),
        Line::from(Span::styled("  Press any key to close", hint_style)),
    ]
}

/// Creates a centered rectangle within a given area.
///
/// If the requested dimensions exceed the available area, the rectangle
/// will be clamped to fit.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    Rect::new(x, y, popup_width, popup_height)
}
