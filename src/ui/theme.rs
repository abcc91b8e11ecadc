//! UI Theme - Shared colors and text sizes

use macroquad::prelude::Color;

// =============================================================================
// Colors
// =============================================================================

/// HUD and dialog text
pub const TEXT_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Button label text
pub const BUTTON_TEXT: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// "Start Game" and "Next Level"
pub const BUTTON_GO: Color = Color::new(0.0, 1.0, 0.0, 1.0);

/// "Repeat"
pub const BUTTON_REPEAT: Color = Color::new(0.0, 0.78, 1.0, 1.0);

/// Static platforms
pub const PLATFORM_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Hazards
pub const HAZARD_COLOR: Color = Color::new(1.0, 0.0, 0.0, 1.0);

/// Dim layer behind the pause text
pub const OVERLAY_COLOR: Color = Color::new(0.0, 0.0, 0.0, 0.4);

// =============================================================================
// Font Sizes
// =============================================================================

/// HUD and button labels
pub const FONT_SIZE_SMALL: f32 = 36.0;

/// Titles ("PAUSED", "Game Over", ...)
pub const FONT_SIZE_LARGE: f32 = 72.0;
