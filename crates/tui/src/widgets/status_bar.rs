//! Status line rendering widget.
//!
//! This module renders the one-line footer: the latest status message, if
//! any, followed by keybinding hints for the current mode.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::palette::Palette;

/// Input mode that decides which hints are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusMode {
    /// Browsing the board.
    #[default]
    Board,
    /// A card is being dragged.
    Dragging,
    /// The add form is open.
    Form,
}

impl StatusMode {
    fn hints(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Board => &[
                ("a", "Add"),
                ("d", "Delete"),
                ("n", "Next stage"),
                ("f", "Finish"),
                ("t", "Theme"),
                ("?", "Help"),
                ("Ctrl+C", "Quit"),
            ],
            Self::Dragging => &[("Release", "Drop"), ("Esc", "Cancel drag")],
            Self::Form => &[
                ("Enter", "Add"),
                ("Tab", "Switch field"),
                ("Esc", "Cancel"),
            ],
        }
    }
}

/// Renders the status line.
///
/// # Layout
///
/// ```text
/// Card added  |  a Add  d Delete  n Next stage  f Finish  t Theme  ? Help  Ctrl+C Quit
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use swimlane_config::Theme;
/// use swimlane_tui::palette::Palette;
/// use swimlane_tui::widgets::{StatusMode, render_status_bar};
///
/// let area = Rect::new(0, 0, 100, 1);
/// let mut buf = Buffer::empty(area);
///
/// render_status_bar(
///     Some("Card moved to Done"),
///     StatusMode::Board,
///     &Palette::for_theme(Theme::Dark),
///     area,
///     &mut buf,
/// );
/// ```
pub fn render_status_bar(
    message: Option<&str>,
    mode: StatusMode,
    palette: &Palette,
    area: Rect,
    buf: &mut Buffer,
) {
    let key_style = Style::default().fg(palette.accent);
    let text_style = Style::default().fg(palette.text);
    let message_style = Style::default().fg(palette.focus);

    let mut spans = Vec::new();
    if let Some(message) = message {
        spans.push(Span::styled(message.to_string(), message_style));
        spans.push(Span::styled("  |  ", Style::default().fg(palette.muted)));
    }
    for (key, action) in mode.hints() {
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(" {action}  "), text_style));
    }

    Paragraph::new(Line::from(spans)).render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use swimlane_config::Theme;

    fn draw(message: Option<&str>, mode: StatusMode) -> String {
        let area = Rect::new(0, 0, 120, 1);
        let mut buf = Buffer::empty(area);
        render_status_bar(message, mode, &Palette::for_theme(Theme::Dark), area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn board_hints() {
        insta::assert_snapshot!(
            draw(None, StatusMode::Board),
            @"a Add  d Delete  n Next stage  f Finish  t Theme  ? Help  Ctrl+C Quit"
        );
    }

    #[test]
    fn message_comes_first() {
        let content = draw(Some("Card deleted"), StatusMode::Board);
        assert!(content.starts_with("Card deleted  |  a Add"));
    }

    #[test]
    fn hints_follow_mode() {
        assert!(draw(None, StatusMode::Dragging).contains("Esc Cancel drag"));
        assert!(draw(None, StatusMode::Form).contains("Tab Switch field"));
    }
}
