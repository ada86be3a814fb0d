//! Color theme constants for the velt UI.
//!
//! Minimal dark palette; everything renders against the terminal's own
//! background.

use ratatui::style::Color;

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for selected rows and active page buttons
pub const COLOR_ACCENT: Color = Color::White;

/// Category and section headers
pub const COLOR_HEADER: Color = Color::Cyan;

/// Dim text for metadata lines and disabled controls
pub const COLOR_DIM: Color = Color::DarkGray;

/// Titles of forums, topics, and post authors
pub const COLOR_TITLE: Color = Color::White;

/// Error text
pub const COLOR_ERROR: Color = Color::Red;

/// Transient status notices
pub const COLOR_NOTICE: Color = Color::LightGreen;
