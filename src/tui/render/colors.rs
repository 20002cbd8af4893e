//! Color palette for the TUI
//!
//! Cohesive, muted colors for a clean look

use ratatui::style::Color;

/// Panel and modal border chrome
pub const BORDER: Color = Color::Rgb(100, 110, 130);
/// Highlight background for the row under the cursor
pub const SURFACE_HIGHLIGHT: Color = Color::Rgb(50, 55, 70);

/// Primary foreground text
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 230);
/// De-emphasized labels
pub const TEXT_DIM: Color = Color::Rgb(130, 135, 150);
/// Placeholder and hint text
pub const TEXT_MUTED: Color = Color::Rgb(90, 95, 110);

/// Positive accents (ready state, committed selection)
pub const ACCENT_POSITIVE: Color = Color::Rgb(120, 180, 120);
/// Warning accents (fetch in flight)
pub const ACCENT_WARNING: Color = Color::Rgb(200, 160, 100);
/// Negative accents (fetch failures)
pub const ACCENT_NEGATIVE: Color = Color::Rgb(200, 100, 100);

/// Modal overlay background
pub const MODAL_BG: Color = Color::Rgb(25, 27, 35);
/// Status bar background
pub const STATUS_BG: Color = Color::Rgb(35, 40, 50);
