//! Color theme constants for the PawMatch UI
//!
//! Warm palette on the terminal's own background.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Base palette
// ============================================================================

/// Borders of panels and cards
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Brand accent - logo, focused fields, selected rows
pub const COLOR_ACCENT: Color = Color::Rgb(255, 112, 67);

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for hints and secondary info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background of the focused text input
pub const COLOR_INPUT_BG: Color = Color::Rgb(30, 30, 40);

// ============================================================================
// Swipe actions
// ============================================================================

pub const COLOR_PASS: Color = Color::Rgb(239, 83, 80);

pub const COLOR_LIKE: Color = Color::Rgb(102, 187, 106);

pub const COLOR_FAVORITE: Color = Color::Rgb(66, 165, 245);

// ============================================================================
// Status
// ============================================================================

pub const COLOR_ERROR: Color = Color::Red;

pub const COLOR_MATCH: Color = Color::Rgb(255, 202, 40);

pub const COLOR_INFO: Color = Color::Cyan;

/// Style applied to a button under the pointer.
pub fn hover_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(COLOR_ACCENT)
        .add_modifier(Modifier::BOLD)
}
