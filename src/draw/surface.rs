//! Drawing surface abstraction consumed by the shape dispatcher.

use super::shape::{Corner, Point};

/// Stroke and fill settings for a single primitive.
///
/// Colors are carried as the names the user typed; resolving them to actual
/// pixels is the surface's business.
#[derive(Clone, Debug, PartialEq)]
pub struct Paint {
    /// Outline color name
    pub outline: String,
    /// Interior color name, `None` for outline-only primitives
    pub fill: Option<String>,
    /// Stroke width in pixels
    pub width: f64,
}

impl Paint {
    /// Outline-only paint.
    pub fn stroke(color: &str, width: f64) -> Self {
        Self {
            outline: color.to_string(),
            fill: None,
            width,
        }
    }

    /// Paint whose interior uses the outline color when `filled` is set.
    pub fn shape(color: &str, filled: bool, width: f64) -> Self {
        Self {
            outline: color.to_string(),
            fill: filled.then(|| color.to_string()),
            width,
        }
    }
}

/// A 2D canvas accepting primitive stroke/fill calls.
///
/// Implementations never report failures back to the caller; a primitive
/// that cannot be drawn (for example because of an unknown color) simply
/// leaves no mark.
pub trait DrawingSurface {
    /// Strokes a straight segment between two points.
    fn stroke_segment(&mut self, from: Point, to: Point, paint: &Paint);

    /// Strokes (and optionally fills) the ellipse inscribed in the box `min..max`.
    fn ellipse(&mut self, min: Corner, max: Corner, paint: &Paint);

    /// Strokes (and optionally fills) the axis-aligned box with corners `min` and `max`.
    fn rectangle(&mut self, min: Corner, max: Corner, paint: &Paint);

    /// Strokes (and optionally fills) a closed polygon; the last vertex joins the first.
    fn polygon(&mut self, points: &[Point], paint: &Paint);

    /// Replaces the canvas background color.
    fn set_background(&mut self, color: &str);
}
