//! Drag-and-drop tuning.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default highlight radius, in terminal rows.
pub const DEFAULT_HIGHLIGHT_RADIUS_ROWS: f64 = 3.0;

/// Configuration for drag feedback.
///
/// # Examples
///
/// ```
/// use swimlane_config::DragConfig;
///
/// let config = DragConfig::default();
/// assert_eq!(config.highlight_radius, 3.0);
/// assert!(config.validate().is_ok());
///
/// let config = DragConfig { highlight_radius: -1.0 };
/// assert!(config.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragConfig {
    /// Distance, in rows, within which the chosen drop slot is drawn
    /// emphasized. Does not affect which slot is chosen.
    #[serde(default = "default_highlight_radius")]
    pub highlight_radius: f64,
}

fn default_highlight_radius() -> f64 {
    DEFAULT_HIGHLIGHT_RADIUS_ROWS
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            highlight_radius: DEFAULT_HIGHLIGHT_RADIUS_ROWS,
        }
    }
}

impl DragConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHighlightRadius`] if the radius is
    /// negative or not finite.
    pub fn validate(&self) -> Result<()> {
        if !self.highlight_radius.is_finite() {
            return Err(ConfigError::InvalidHighlightRadius {
                reason: "must be a finite number".to_string(),
            });
        }
        if self.highlight_radius < 0.0 {
            return Err(ConfigError::InvalidHighlightRadius {
                reason: format!("{} is negative", self.highlight_radius),
            });
        }
        Ok(())
    }
}
