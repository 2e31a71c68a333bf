//! Frame container recording the primitives drawn on a canvas.

use super::shape::{Corner, Point};
use super::surface::{DrawingSurface, Paint};

/// A single recorded surface call.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// Stroked segment
    Segment {
        /// Start point
        from: Point,
        /// End point
        to: Point,
        /// Stroke settings
        paint: Paint,
    },
    /// Ellipse inscribed in a bounding box
    Ellipse {
        /// Top-left corner of the bounding box
        min: Corner,
        /// Bottom-right corner of the bounding box
        max: Corner,
        /// Stroke/fill settings
        paint: Paint,
    },
    /// Axis-aligned box
    Rectangle {
        /// First corner
        min: Corner,
        /// Opposite corner
        max: Corner,
        /// Stroke/fill settings
        paint: Paint,
    },
    /// Closed polygon
    Polygon {
        /// Vertices in drawing order
        points: Vec<Point>,
        /// Stroke/fill settings
        paint: Paint,
    },
}

impl Primitive {
    /// Returns the paint used by this primitive.
    pub fn paint(&self) -> &Paint {
        match self {
            Primitive::Segment { paint, .. }
            | Primitive::Ellipse { paint, .. }
            | Primitive::Rectangle { paint, .. }
            | Primitive::Polygon { paint, .. } => paint,
        }
    }
}

/// Accumulated drawing state of a canvas.
///
/// Holds the background color and every primitive in draw order
/// (first = bottom layer, last = top layer). There is no removal; the
/// frame only grows for the lifetime of a session.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Current background color name
    pub background: String,
    /// All primitives in draw order
    pub primitives: Vec<Primitive>,
}

impl Default for Frame {
    fn default() -> Self {
        Self::new("white")
    }
}

impl Frame {
    /// Creates an empty frame with the given background color.
    pub fn new(background: &str) -> Self {
        Self {
            background: background.to_string(),
            primitives: Vec::new(),
        }
    }

    /// Number of recorded primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Returns `true` when nothing has been drawn yet.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Appends a primitive on top of the existing ones.
    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }
}

impl DrawingSurface for Frame {
    fn stroke_segment(&mut self, from: Point, to: Point, paint: &Paint) {
        self.push(Primitive::Segment {
            from,
            to,
            paint: paint.clone(),
        });
    }

    fn ellipse(&mut self, min: Corner, max: Corner, paint: &Paint) {
        self.push(Primitive::Ellipse {
            min,
            max,
            paint: paint.clone(),
        });
    }

    fn rectangle(&mut self, min: Corner, max: Corner, paint: &Paint) {
        self.push(Primitive::Rectangle {
            min,
            max,
            paint: paint.clone(),
        });
    }

    fn polygon(&mut self, points: &[Point], paint: &Paint) {
        self.push(Primitive::Polygon {
            points: points.to_vec(),
            paint: paint.clone(),
        });
    }

    fn set_background(&mut self, color: &str) {
        self.background = color.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_records_primitives_in_order() {
        let mut frame = Frame::new("white");
        assert!(frame.is_empty());

        frame.stroke_segment((0, 0), (5, 5), &Paint::stroke("red", 2.0));
        frame.polygon(&[(0, 0), (4, 0), (2, 3)], &Paint::shape("blue", true, 2.0));

        assert_eq!(frame.len(), 2);
        assert!(matches!(frame.primitives[0], Primitive::Segment { .. }));
        assert_eq!(frame.primitives[1].paint().fill.as_deref(), Some("blue"));
    }

    #[test]
    fn background_change_keeps_primitives() {
        let mut frame = Frame::default();
        frame.rectangle((0, 0), (10, 10), &Paint::shape("green", false, 1.0));
        frame.set_background("lightblue");

        assert_eq!(frame.background, "lightblue");
        assert_eq!(frame.len(), 1);
    }
}
