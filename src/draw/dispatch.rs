//! Maps parsed drawing commands onto surface primitives.

use super::shape::{DrawCommand, ShapeKind, corner};
use super::surface::{DrawingSurface, Paint};
use log::debug;

/// Stroke width for line segments.
pub const LINE_WIDTH: f64 = 2.0;

/// Stroke width for triangle and trapezoid outlines.
pub const POLYGON_WIDTH: f64 = 2.0;

/// Stroke width for circle, rectangle and square outlines.
pub const OUTLINE_WIDTH: f64 = 1.0;

/// Issues exactly one primitive call on `surface` for `cmd`.
///
/// The outline always uses the command color. The interior is painted with
/// the same color only when `cmd.filled` is set; otherwise it is left
/// unpainted whatever the color. Color names are passed through untouched.
///
/// Box corners are computed in `i64`, so extreme `i32` arguments yield
/// corners outside the `i32` range instead of overflowing.
pub fn dispatch<S: DrawingSurface + ?Sized>(cmd: &DrawCommand, surface: &mut S) {
    debug_assert!(
        cmd.kind.supports_fill() || !cmd.filled,
        "{} has no filled variant",
        cmd.kind.name()
    );
    let color = cmd.color.as_str();
    debug!(
        "Dispatching {}{} {:?} in {}",
        if cmd.filled { "filled " } else { "" },
        cmd.kind.name(),
        cmd.numeric_args(),
        color
    );

    match &cmd.kind {
        ShapeKind::Line { x1, y1, x2, y2 } => {
            surface.stroke_segment((*x1, *y1), (*x2, *y2), &Paint::stroke(color, LINE_WIDTH));
        }
        ShapeKind::Circle { cx, cy, radius } => {
            let paint = Paint::shape(color, cmd.filled, OUTLINE_WIDTH);
            let (cx, cy) = corner(*cx, *cy);
            let radius = i64::from(*radius);
            surface.ellipse((cx - radius, cy - radius), (cx + radius, cy + radius), &paint);
        }
        ShapeKind::Rectangle {
            x,
            y,
            width,
            height,
        } => {
            let paint = Paint::shape(color, cmd.filled, OUTLINE_WIDTH);
            let (x, y) = corner(*x, *y);
            surface.rectangle((x, y), (x + i64::from(*width), y + i64::from(*height)), &paint);
        }
        ShapeKind::Square { x, y, side } => {
            let paint = Paint::shape(color, cmd.filled, OUTLINE_WIDTH);
            let (x, y) = corner(*x, *y);
            let side = i64::from(*side);
            surface.rectangle((x, y), (x + side, y + side), &paint);
        }
        ShapeKind::Triangle { points } => {
            surface.polygon(points, &Paint::shape(color, cmd.filled, POLYGON_WIDTH));
        }
        ShapeKind::Trapezoid { points } => {
            surface.polygon(points, &Paint::shape(color, cmd.filled, POLYGON_WIDTH));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{Frame, Primitive};

    fn command(kind: ShapeKind, filled: bool, color: &str) -> DrawCommand {
        DrawCommand {
            kind,
            filled,
            color: color.to_string(),
        }
    }

    fn dispatch_one(cmd: &DrawCommand) -> Primitive {
        let mut frame = Frame::default();
        dispatch(cmd, &mut frame);
        assert_eq!(frame.len(), 1, "each command maps to one primitive");
        frame.primitives.remove(0)
    }

    #[test]
    fn circle_uses_inscribed_bounding_box() {
        let cmd = command(
            ShapeKind::Circle {
                cx: 100,
                cy: 100,
                radius: 50,
            },
            false,
            "blue",
        );

        assert_eq!(
            dispatch_one(&cmd),
            Primitive::Ellipse {
                min: (50, 50),
                max: (150, 150),
                paint: Paint {
                    outline: "blue".into(),
                    fill: None,
                    width: OUTLINE_WIDTH,
                },
            }
        );
    }

    #[test]
    fn filled_circle_paints_interior_with_stroke_color() {
        let cmd = command(
            ShapeKind::Circle {
                cx: 100,
                cy: 100,
                radius: 50,
            },
            true,
            "black",
        );

        let primitive = dispatch_one(&cmd);
        assert_eq!(primitive.paint().fill.as_deref(), Some("black"));
        assert_eq!(primitive.paint().outline, "black");
    }

    #[test]
    fn square_is_rectangle_with_equal_sides() {
        let cmd = command(ShapeKind::Square { x: 10, y: 20, side: 5 }, true, "red");

        match dispatch_one(&cmd) {
            Primitive::Rectangle { min, max, paint } => {
                assert_eq!(min, (10, 20));
                assert_eq!(max, (15, 25));
                assert_eq!(paint.fill.as_deref(), Some("red"));
            }
            other => panic!("expected rectangle, got {other:?}"),
        }
    }

    #[test]
    fn rectangle_extends_by_width_and_height() {
        let cmd = command(
            ShapeKind::Rectangle {
                x: -10,
                y: 0,
                width: 30,
                height: 40,
            },
            false,
            "green",
        );

        match dispatch_one(&cmd) {
            Primitive::Rectangle { min, max, .. } => {
                assert_eq!(min, (-10, 0));
                assert_eq!(max, (20, 40));
            }
            other => panic!("expected rectangle, got {other:?}"),
        }
    }

    #[test]
    fn line_is_stroked_at_fixed_width() {
        let cmd = command(
            ShapeKind::Line {
                x1: 0,
                y1: 0,
                x2: 10,
                y2: 10,
            },
            false,
            "purple",
        );

        assert_eq!(
            dispatch_one(&cmd),
            Primitive::Segment {
                from: (0, 0),
                to: (10, 10),
                paint: Paint::stroke("purple", LINE_WIDTH),
            }
        );
    }

    #[test]
    fn polygons_keep_vertex_order() {
        let triangle = command(
            ShapeKind::Triangle {
                points: [(0, 0), (10, 0), (5, 8)],
            },
            false,
            "black",
        );
        let trapezoid = command(
            ShapeKind::Trapezoid {
                points: [(0, 0), (20, 0), (15, 10), (5, 10)],
            },
            true,
            "orange",
        );

        match dispatch_one(&triangle) {
            Primitive::Polygon { points, paint } => {
                assert_eq!(points, vec![(0, 0), (10, 0), (5, 8)]);
                assert_eq!(paint.width, POLYGON_WIDTH);
            }
            other => panic!("expected polygon, got {other:?}"),
        }
        match dispatch_one(&trapezoid) {
            Primitive::Polygon { points, paint } => {
                assert_eq!(points.len(), 4);
                assert_eq!(paint.fill.as_deref(), Some("orange"));
            }
            other => panic!("expected polygon, got {other:?}"),
        }
    }

    #[test]
    fn outline_mode_never_fills_any_shape() {
        let kinds = [
            ShapeKind::Circle {
                cx: 1,
                cy: 1,
                radius: 1,
            },
            ShapeKind::Rectangle {
                x: 0,
                y: 0,
                width: 1,
                height: 1,
            },
            ShapeKind::Square { x: 0, y: 0, side: 1 },
            ShapeKind::Triangle {
                points: [(0, 0), (1, 0), (0, 1)],
            },
            ShapeKind::Trapezoid {
                points: [(0, 0), (3, 0), (2, 1), (1, 1)],
            },
        ];

        for kind in kinds {
            let primitive = dispatch_one(&command(kind, false, "red"));
            assert!(primitive.paint().fill.is_none(), "{primitive:?} was filled");
        }
    }

    #[test]
    fn box_corners_do_not_overflow_at_i32_limits() {
        let max = i64::from(i32::MAX);
        let min = i64::from(i32::MIN);

        let circle = command(
            ShapeKind::Circle {
                cx: i32::MAX,
                cy: 0,
                radius: 1,
            },
            false,
            "red",
        );
        match dispatch_one(&circle) {
            Primitive::Ellipse { min: lo, max: hi, .. } => {
                assert_eq!(lo, (max - 1, -1));
                assert_eq!(hi, (max + 1, 1));
            }
            other => panic!("expected ellipse, got {other:?}"),
        }

        let rectangle = command(
            ShapeKind::Rectangle {
                x: 2_147_483_000,
                y: 0,
                width: 1000,
                height: 10,
            },
            false,
            "black",
        );
        match dispatch_one(&rectangle) {
            Primitive::Rectangle { max: hi, .. } => assert_eq!(hi, (2_147_484_000, 10)),
            other => panic!("expected rectangle, got {other:?}"),
        }

        let square = command(
            ShapeKind::Square {
                x: i32::MIN,
                y: 0,
                side: -1,
            },
            false,
            "black",
        );
        match dispatch_one(&square) {
            Primitive::Rectangle { min: lo, max: hi, .. } => {
                assert_eq!(lo, (min, 0));
                assert_eq!(hi, (min - 1, -1));
            }
            other => panic!("expected rectangle, got {other:?}"),
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "line has no filled variant")]
    fn filled_line_is_rejected() {
        let cmd = command(
            ShapeKind::Line {
                x1: 0,
                y1: 0,
                x2: 1,
                y2: 1,
            },
            true,
            "black",
        );
        let mut frame = Frame::default();
        dispatch(&cmd, &mut frame);
    }
}
