//! Utility functions for color name resolution.
//!
//! The command grammar only checks that a color token is alphabetic. Turning
//! that token into pixels happens here, on the rendering side, so names the
//! palette does not know are rejected by the canvas rather than the parser.

use crate::draw::{Color, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings (or `#rgb` / `#rrggbb` hex) to Color values.
///
/// Names are matched case-insensitively against a palette of the common
/// X11 color names. Both `gray` and `grey` spellings are accepted.
///
/// # Returns
/// - `Some(Color)` if the name matches a known color or valid hex triplet
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    if let Some(hex) = name.strip_prefix('#') {
        return hex_to_color(hex);
    }

    let name = name.to_lowercase().replace("grey", "gray");
    let color = match name.as_str() {
        "black" => BLACK,
        "white" => WHITE,
        "red" => RED,
        "green" => GREEN,
        "blue" => BLUE,
        "yellow" => Color::from_rgb8(255, 255, 0),
        "orange" => Color::from_rgb8(255, 165, 0),
        "pink" => Color::from_rgb8(255, 192, 203),
        "purple" => Color::from_rgb8(160, 32, 240),
        "violet" => Color::from_rgb8(238, 130, 238),
        "magenta" | "fuchsia" => Color::from_rgb8(255, 0, 255),
        "cyan" | "aqua" => Color::from_rgb8(0, 255, 255),
        "brown" => Color::from_rgb8(165, 42, 42),
        "gray" => Color::from_rgb8(190, 190, 190),
        "darkgray" => Color::from_rgb8(169, 169, 169),
        "lightgray" => Color::from_rgb8(211, 211, 211),
        "navy" => Color::from_rgb8(0, 0, 128),
        "teal" => Color::from_rgb8(0, 128, 128),
        "olive" => Color::from_rgb8(128, 128, 0),
        "maroon" => Color::from_rgb8(176, 48, 96),
        "lime" => Color::from_rgb8(0, 255, 0),
        "gold" => Color::from_rgb8(255, 215, 0),
        "silver" => Color::from_rgb8(192, 192, 192),
        "indigo" => Color::from_rgb8(75, 0, 130),
        "turquoise" => Color::from_rgb8(64, 224, 208),
        "coral" => Color::from_rgb8(255, 127, 80),
        "salmon" => Color::from_rgb8(250, 128, 114),
        "tomato" => Color::from_rgb8(255, 99, 71),
        "khaki" => Color::from_rgb8(240, 230, 140),
        "beige" => Color::from_rgb8(245, 245, 220),
        "ivory" => Color::from_rgb8(255, 255, 240),
        "lavender" => Color::from_rgb8(230, 230, 250),
        "orchid" => Color::from_rgb8(218, 112, 214),
        "plum" => Color::from_rgb8(221, 160, 221),
        "tan" => Color::from_rgb8(210, 180, 140),
        "chocolate" => Color::from_rgb8(210, 105, 30),
        "crimson" => Color::from_rgb8(220, 20, 60),
        "skyblue" => Color::from_rgb8(135, 206, 235),
        "lightblue" => Color::from_rgb8(173, 216, 230),
        "darkblue" => Color::from_rgb8(0, 0, 139),
        "royalblue" => Color::from_rgb8(65, 105, 225),
        "steelblue" => Color::from_rgb8(70, 130, 180),
        "lightgreen" => Color::from_rgb8(144, 238, 144),
        "darkgreen" => Color::from_rgb8(0, 100, 0),
        "forestgreen" => Color::from_rgb8(34, 139, 34),
        "seagreen" => Color::from_rgb8(46, 139, 87),
        "darkred" => Color::from_rgb8(139, 0, 0),
        "lightyellow" => Color::from_rgb8(255, 255, 224),
        "lightpink" => Color::from_rgb8(255, 182, 193),
        "hotpink" => Color::from_rgb8(255, 105, 180),
        "darkorange" => Color::from_rgb8(255, 140, 0),
        "wheat" => Color::from_rgb8(245, 222, 179),
        "snow" => Color::from_rgb8(255, 250, 250),
        _ => return None,
    };
    Some(color)
}

/// Parses the digits of a `#rgb` or `#rrggbb` color (without the `#`).
fn hex_to_color(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |digits: &str| u8::from_str_radix(digits, 16).ok();
    match hex.len() {
        3 => {
            // Each digit is doubled: #f80 == #ff8800
            let mut rgb = [0u8; 3];
            for (slot, c) in rgb.iter_mut().zip(hex.chars()) {
                *slot = channel(&c.to_string())? * 17;
            }
            Some(Color::from_rgb8(rgb[0], rgb[1], rgb[2]))
        }
        6 => Some(Color::from_rgb8(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => None,
    }
}
