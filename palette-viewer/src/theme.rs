//! Colors, strokes and sizes for the picker UI.
//!
//! The gradient itself is the page; chrome stays dark and neutral so the
//! picked colors read true.

use egui::Color32;
use palette_core::Rgb;

// =============================================================================
// BACKGROUND
// =============================================================================
pub const CANVAS_BG: Color32 = Color32::from_rgb(32, 34, 37);
pub const WHEEL_BG: Color32 = Color32::from_rgb(44, 46, 50);

// =============================================================================
// SWATCHES
// =============================================================================
pub const SWATCH_BORDER: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 90);
pub const SWATCH_HOVER: Color32 = Color32::from_rgb(255, 255, 255);
pub const SWATCH_SELECTED: Color32 = Color32::from_rgb(255, 220, 50);
/// Stand-in for a stop the catalog could not resolve.
pub const MISSING_STOP: Color32 = Color32::from_rgb(60, 60, 64);

// =============================================================================
// CODE DISPLAY
// =============================================================================
pub const CODE_BG: Color32 = Color32::from_rgba_premultiplied(20, 20, 22, 220);
pub const CODE_TEXT: Color32 = Color32::from_rgb(235, 235, 235);

// =============================================================================
// TEXT
// =============================================================================
pub const DIM_TEXT: Color32 = Color32::from_rgb(140, 145, 150);

// =============================================================================
// STROKE WIDTHS AND SIZES
// =============================================================================
pub const SWATCH_STROKE_WIDTH: f32 = 1.0;
pub const HOVER_STROKE_WIDTH: f32 = 2.0;
pub const SELECTED_STROKE_WIDTH: f32 = 2.5;
pub const WHEEL_SIZE: f32 = 230.0;
pub const SLOT_SWATCH_HEIGHT: f32 = 36.0;

/// Convert a palette color for painting.
pub fn color32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}
