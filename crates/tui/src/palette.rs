//! Colors for the light and dark themes.

use ratatui::style::Color;
use swimlane_config::Theme;
use swimlane_protocol::ColumnId;

/// Colors used across the widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background.
    pub background: Color,
    /// Primary text.
    pub text: Color,
    /// Secondary text and placeholders.
    pub muted: Color,
    /// Unfocused borders.
    pub border: Color,
    /// Focused borders and selection.
    pub focus: Color,
    /// Key hints and the help cue.
    pub accent: Color,
    /// Drop slot indicators.
    pub indicator: Color,
    /// The burn barrel and delete feedback.
    pub danger: Color,
}

impl Palette {
    /// Returns the palette for `theme`.
    #[must_use]
    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                background: Color::Reset,
                text: Color::White,
                muted: Color::DarkGray,
                border: Color::DarkGray,
                focus: Color::Cyan,
                accent: Color::Yellow,
                indicator: Color::LightMagenta,
                danger: Color::LightRed,
            },
            Theme::Light => Self {
                background: Color::White,
                text: Color::Black,
                muted: Color::Gray,
                border: Color::Gray,
                focus: Color::Blue,
                accent: Color::Rgb(0xB8, 0x86, 0x0B),
                indicator: Color::Magenta,
                danger: Color::Red,
            },
        }
    }
}

/// Returns the heading color of a column.
#[must_use]
pub const fn column_color(column: ColumnId) -> Color {
    let (r, g, b) = column.rgb();
    Color::Rgb(r, g, b)
}
