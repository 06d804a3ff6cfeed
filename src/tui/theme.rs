//! TUI color semantics and style constants.
//!
//! Pure data, consumed by the rendering layer for visual consistency.
//!
//! Color semantics:
//! - Aqua: screen headers and the frame border
//! - Cyan: interactive elements (prompt, selected row)
//! - Violet to pink: the progress gradient
//! - Dim: de-emphasized (footer, placeholder, empty gauge cells)
//! - Bold: important (percentages)

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// PALETTE
// ============================================================================

/// Header text color (#00FFCC).
pub const COLOR_HEADER: Color = Color::Rgb(0x00, 0xFF, 0xCC);

/// Border color (#00FFFF).
pub const COLOR_BORDER: Color = Color::Rgb(0x00, 0xFF, 0xFF);

/// First color of the progress gradient (#5A56E0).
pub const GRADIENT_START: (u8, u8, u8) = (0x5A, 0x56, 0xE0);

/// Last color of the progress gradient (#EE6FF8).
pub const GRADIENT_END: (u8, u8, u8) = (0xEE, 0x6F, 0xF8);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Screen header.
pub const STYLE_HEADER: Style = Style::new().fg(COLOR_HEADER).add_modifier(Modifier::BOLD);

/// Frame border.
pub const STYLE_BORDER: Style = Style::new().fg(COLOR_BORDER);

/// Footer / keybinding line.
pub const STYLE_FOOTER: Style = Style::new().fg(Color::DarkGray);

/// De-emphasized text.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Important text.
pub const STYLE_IMPORTANT: Style = Style::new().add_modifier(Modifier::BOLD);

/// Row under the list cursor.
pub const STYLE_SELECTED: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Search prompt.
pub const STYLE_PROMPT: Style = Style::new().fg(Color::Cyan);

/// Cell under the text edit cursor.
pub const STYLE_EDIT_CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Placeholder text in an empty input.
pub const STYLE_PLACEHOLDER: Style = Style::new().fg(Color::DarkGray);

/// Unfilled part of the progress bar.
pub const STYLE_GAUGE_EMPTY: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================
