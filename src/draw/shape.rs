//! Shape definitions for parsed drawing commands.

/// A pixel coordinate pair `(x, y)`.
pub type Point = (i32, i32);

/// A box corner derived from user coordinates.
///
/// Widened to `i64` so that `x + width` or `cx - radius` cannot overflow
/// for any pair of `i32` arguments.
pub type Corner = (i64, i64);

/// Widens a point into a [`Corner`].
pub fn corner(x: i32, y: i32) -> Corner {
    (i64::from(x), i64::from(y))
}

/// Geometry of a drawable shape, as typed by the user.
///
/// Each variant keeps the numeric arguments in the order they appeared on the
/// command line, so [`ShapeKind::numeric_args`] reproduces the input exactly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    /// Straight segment between two points
    Line {
        /// Starting X coordinate
        x1: i32,
        /// Starting Y coordinate
        y1: i32,
        /// Ending X coordinate
        x2: i32,
        /// Ending Y coordinate
        y2: i32,
    },
    /// Circle given by its center and radius
    Circle {
        /// Center X coordinate
        cx: i32,
        /// Center Y coordinate
        cy: i32,
        /// Radius in pixels
        radius: i32,
    },
    /// Axis-aligned box anchored at its top-left corner
    Rectangle {
        /// Top-left X coordinate
        x: i32,
        /// Top-left Y coordinate
        y: i32,
        /// Width in pixels
        width: i32,
        /// Height in pixels
        height: i32,
    },
    /// Closed three-point polygon
    Triangle {
        /// Vertices in input order
        points: [Point; 3],
    },
    /// Axis-aligned box with equal sides
    Square {
        /// Top-left X coordinate
        x: i32,
        /// Top-left Y coordinate
        y: i32,
        /// Side length in pixels
        side: i32,
    },
    /// Closed four-point polygon
    Trapezoid {
        /// Vertices in input order
        points: [Point; 4],
    },
}

impl ShapeKind {
    /// Returns the lowercase keyword naming this shape.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Line { .. } => "line",
            ShapeKind::Circle { .. } => "circle",
            ShapeKind::Rectangle { .. } => "rectangle",
            ShapeKind::Triangle { .. } => "triangle",
            ShapeKind::Square { .. } => "square",
            ShapeKind::Trapezoid { .. } => "trapezoid",
        }
    }

    /// Whether this shape accepts the `f`-prefixed filled variant.
    pub fn supports_fill(&self) -> bool {
        !matches!(self, ShapeKind::Line { .. })
    }

    /// Returns the numeric arguments in command-line order.
    pub fn numeric_args(&self) -> Vec<i32> {
        match self {
            ShapeKind::Line { x1, y1, x2, y2 } => vec![*x1, *y1, *x2, *y2],
            ShapeKind::Circle { cx, cy, radius } => vec![*cx, *cy, *radius],
            ShapeKind::Rectangle {
                x,
                y,
                width,
                height,
            } => vec![*x, *y, *width, *height],
            ShapeKind::Triangle { points } => flatten(points),
            ShapeKind::Square { x, y, side } => vec![*x, *y, *side],
            ShapeKind::Trapezoid { points } => flatten(points),
        }
    }
}

fn flatten(points: &[Point]) -> Vec<i32> {
    points.iter().flat_map(|&(x, y)| [x, y]).collect()
}

/// A validated drawing command, created and consumed within one command cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawCommand {
    /// Shape and its geometry
    pub kind: ShapeKind,
    /// Whether the interior is painted with the stroke color
    pub filled: bool,
    /// Color name as typed, or the default `"black"`
    pub color: String,
}

impl DrawCommand {
    /// Returns the numeric arguments in command-line order.
    pub fn numeric_args(&self) -> Vec<i32> {
        self.kind.numeric_args()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_args_preserve_input_order() {
        let shape = ShapeKind::Trapezoid {
            points: [(1, 2), (3, 4), (5, 6), (7, 8)],
        };
        assert_eq!(shape.numeric_args(), vec![1, 2, 3, 4, 5, 6, 7, 8]);

        let shape = ShapeKind::Rectangle {
            x: -5,
            y: 10,
            width: 30,
            height: 40,
        };
        assert_eq!(shape.numeric_args(), vec![-5, 10, 30, 40]);
    }

    #[test]
    fn only_line_lacks_filled_variant() {
        let line = ShapeKind::Line {
            x1: 0,
            y1: 0,
            x2: 1,
            y2: 1,
        };
        let square = ShapeKind::Square { x: 0, y: 0, side: 1 };
        assert!(!line.supports_fill());
        assert!(square.supports_fill());
        assert_eq!(square.name(), "square");
    }
}
