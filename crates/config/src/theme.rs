//! Light/dark theme preference.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Color theme for the board.
///
/// # Examples
///
/// ```
/// use swimlane_config::Theme;
///
/// let theme: Theme = "light".parse().unwrap();
/// assert_eq!(theme.toggle(), Theme::Dark);
/// assert_eq!(Theme::default(), Theme::Dark);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark text on a light background.
    Light,
    /// Light text on a dark background.
    #[default]
    Dark,
}

impl Theme {
    /// Returns the other theme.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Returns the stored name of the theme.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Picks the starting theme: the stored preference, else the configured
    /// default, else [`Theme::Dark`].
    #[must_use]
    pub fn resolve(stored: Option<Self>, configured: Option<Self>) -> Self {
        stored.or(configured).unwrap_or_default()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ConfigError::InvalidTheme(other.to_string())),
        }
    }
}
