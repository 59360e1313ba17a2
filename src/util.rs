//! Color name mapping and drag-geometry helpers.

use crate::draw::{Color, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system and the script `color` command.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

/// Parses a color given either as a predefined name or a 6-hex-digit string.
///
/// Returns `None` for anything else; callers treat that as a non-fatal no-op.
pub fn parse_color(spec: &str) -> Option<Color> {
    name_to_color(spec).or_else(|| Color::from_hex(spec))
}

/// Maps a Color value to its human-readable name.
///
/// Uses approximate matching (threshold-based) to identify colors. Used in log
/// output when reporting the active drawing color.
pub fn color_to_name(color: &Color) -> &'static str {
    // Match colors approximately with 0.1 tolerance
    if color.r > 0.9 && color.g < 0.1 && color.b < 0.1 {
        "Red"
    } else if color.r < 0.1 && color.g > 0.9 && color.b < 0.1 {
        "Green"
    } else if color.r < 0.1 && color.g < 0.1 && color.b > 0.9 {
        "Blue"
    } else if color.r > 0.9 && color.g > 0.9 && color.b < 0.1 {
        "Yellow"
    } else if color.r > 0.9 && (0.4..=0.6).contains(&color.g) && color.b < 0.1 {
        "Orange"
    } else if color.r > 0.9 && color.g < 0.1 && color.b > 0.9 {
        "Pink"
    } else if color.r > 0.9 && color.g > 0.9 && color.b > 0.9 {
        "White"
    } else if color.r < 0.1 && color.g < 0.1 && color.b < 0.1 {
        "Black"
    } else {
        "Custom"
    }
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Opposite corner for the square tool's equal-side snapping.
///
/// The side length is the shorter of the two drag deltas, and the corner
/// direction follows the sign of each delta relative to the start point.
///
/// # Arguments
/// * `x1`, `y1` - Drag start (the fixed corner)
/// * `x2`, `y2` - Current or release pointer position
///
/// # Returns
/// Pixel coordinates of the corner opposite the start point.
pub fn square_corner(x1: i32, y1: i32, x2: i32, y2: i32) -> (i32, i32) {
    let size = (x2 - x1).abs().min((y2 - y1).abs());
    let dir_x = if x2 >= x1 { 1 } else { -1 };
    let dir_y = if y2 >= y1 { 1 } else { -1 };
    (x1 + dir_x * size, y1 + dir_y * size)
}
