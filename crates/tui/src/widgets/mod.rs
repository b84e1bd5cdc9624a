//! Widget components for the swimlane TUI.
//!
//! This module provides rendering functions for the Kanban board UI,
//! organized into focused submodules for each visual component.
//!
//! # Overview
//!
//! Each widget is a plain function that renders state into a buffer. Board
//! and column rendering read their positions from a precomputed
//! [`BoardGeometry`](crate::geometry::BoardGeometry), the same value the app
//! uses for mouse hit-testing and drop location.
//!
//! # Modules
//!
//! - [`board`]: Renders the six columns side by side
//! - [`column`]: Renders one column: header, drop slots, cards, add row
//! - [`card`]: Renders a single card
//! - [`drop_indicator`]: Renders a drop slot line
//! - [`distribution`]: Renders the per-column distribution summary
//! - [`burn_barrel`]: Renders the delete drop target
//! - [`status_bar`]: Renders the status message and keybinding hints
//! - [`form`]: Renders the add-card form overlay
//! - [`help`]: Renders the help overlay
//!
//! # Column Colors
//!
//! Column headings and distribution segments use the column's own color:
//!
//! | Column | Color |
//! |--------|-------|
//! | Backlog | Tomato `#FF6347` |
//! | Todo | Gold `#FFD700` |
//! | Doing | Dodger blue `#1E90FF` |
//! | Active | Blue violet `#8A2BE2` |
//! | In progress | Orange `#FFA500` |
//! | Done | Lime green `#32CD32` |

pub mod board;
pub mod burn_barrel;
pub mod card;
pub mod column;
pub mod distribution;
pub mod drop_indicator;
pub mod form;
pub mod help;
pub mod status_bar;

pub use board::{BoardView, render_board};
pub use burn_barrel::render_burn_barrel;
pub use card::{CardLook, render_card};
pub use column::{ColumnView, render_column};
pub use distribution::render_distribution;
pub use drop_indicator::{IndicatorState, render_drop_indicator};
pub use form::render_card_form;
pub use help::render_help_overlay;
pub use status_bar::{StatusMode, render_status_bar};

#[cfg(test)]
mod tests;
