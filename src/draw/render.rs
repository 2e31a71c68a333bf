//! Cairo-based rendering of recorded primitives.

use super::color::Color;
use super::frame::{Frame, Primitive};
use super::shape::{Corner, Point};
use super::surface::{DrawingSurface, Paint};
use crate::util;
use log::{debug, warn};

/// Fills the whole canvas with the background color.
///
/// Unknown color names leave the canvas untouched.
pub fn render_background(ctx: &cairo::Context, color: &str) {
    match util::name_to_color(color) {
        Some(bg) => {
            ctx.set_source_rgba(bg.r, bg.g, bg.b, bg.a);
            let _ = ctx.paint(); // Ignore errors - a failed paint keeps the previous pixels
        }
        None => debug!("Skipping background: unknown color '{}'", color),
    }
}

/// Renders a frame: background first, then every primitive in draw order.
pub fn render_frame(ctx: &cairo::Context, frame: &Frame) {
    render_background(ctx, &frame.background);
    for primitive in &frame.primitives {
        render_primitive(ctx, primitive);
    }
}

/// Renders a single primitive to a Cairo context.
///
/// Primitives whose outline or fill color cannot be resolved are skipped
/// entirely.
pub fn render_primitive(ctx: &cairo::Context, primitive: &Primitive) {
    let Some((outline, fill)) = resolve_paint(primitive.paint()) else {
        debug!("Skipping primitive with unknown color: {:?}", primitive);
        return;
    };
    let width = primitive.paint().width;

    match primitive {
        Primitive::Segment { from, to, .. } => render_segment(ctx, *from, *to, outline, width),
        Primitive::Ellipse { min, max, .. } => {
            if path_ellipse(ctx, *min, *max) {
                finish_path(ctx, outline, fill, width);
            }
        }
        Primitive::Rectangle { min, max, .. } => {
            path_rect(ctx, *min, *max);
            finish_path(ctx, outline, fill, width);
        }
        Primitive::Polygon { points, .. } => {
            if path_polygon(ctx, points) {
                finish_path(ctx, outline, fill, width);
            }
        }
    }
}

fn resolve_paint(paint: &Paint) -> Option<(Color, Option<Color>)> {
    let outline = util::name_to_color(&paint.outline)?;
    let fill = match &paint.fill {
        Some(name) => Some(util::name_to_color(name)?),
        None => None,
    };
    Some((outline, fill))
}

/// Fills the current path (when a fill color is given) and strokes it.
fn finish_path(ctx: &cairo::Context, outline: Color, fill: Option<Color>, width: f64) {
    if let Some(fill) = fill {
        ctx.set_source_rgba(fill.r, fill.g, fill.b, fill.a);
        let _ = ctx.fill_preserve();
    }
    ctx.set_source_rgba(outline.r, outline.g, outline.b, outline.a);
    ctx.set_line_width(width);
    ctx.set_line_join(cairo::LineJoin::Miter);
    let _ = ctx.stroke();
}

/// Render a straight line
fn render_segment(ctx: &cairo::Context, from: Point, to: Point, color: Color, width: f64) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(width);
    ctx.set_line_cap(cairo::LineCap::Butt);

    ctx.move_to(from.0 as f64, from.1 as f64);
    ctx.line_to(to.0 as f64, to.1 as f64);
    let _ = ctx.stroke();
}

fn path_rect(ctx: &cairo::Context, min: Corner, max: Corner) {
    // Corners may arrive in any order when width/height are negative
    let x = min.0.min(max.0) as f64;
    let y = min.1.min(max.1) as f64;
    let w = (max.0 - min.0).abs() as f64;
    let h = (max.1 - min.1).abs() as f64;
    ctx.rectangle(x, y, w, h);
}

/// Builds an ellipse path using Cairo's arc with scaling.
///
/// Returns `false` for degenerate boxes, which have nothing to draw.
fn path_ellipse(ctx: &cairo::Context, min: Corner, max: Corner) -> bool {
    let rx = (max.0 - min.0).abs() as f64 / 2.0;
    let ry = (max.1 - min.1).abs() as f64 / 2.0;
    if rx == 0.0 || ry == 0.0 {
        return false;
    }
    let cx = (min.0 + max.0) as f64 / 2.0;
    let cy = (min.1 + max.1) as f64 / 2.0;

    ctx.save().ok();
    ctx.translate(cx, cy);
    ctx.scale(rx, ry);
    ctx.new_path();
    ctx.arc(0.0, 0.0, 1.0, 0.0, 2.0 * std::f64::consts::PI);
    ctx.restore().ok();
    true
}

fn path_polygon(ctx: &cairo::Context, points: &[Point]) -> bool {
    let Some((&(x0, y0), rest)) = points.split_first() else {
        return false;
    };
    ctx.new_path();
    ctx.move_to(x0 as f64, y0 as f64);
    for &(x, y) in rest {
        ctx.line_to(x as f64, y as f64);
    }
    ctx.close_path();
    true
}

/// A [`DrawingSurface`] that paints into a Cairo image surface.
///
/// Every primitive is recorded in a [`Frame`] as well as painted, so that a
/// background change can repaint the existing drawing on top of the new
/// color, the way a retained canvas behaves.
pub struct CairoCanvas {
    surface: cairo::ImageSurface,
    frame: Frame,
}

impl CairoCanvas {
    /// Creates a canvas of the given size filled with `background`.
    ///
    /// # Errors
    /// Returns an error if Cairo cannot allocate the image surface.
    pub fn new(width: i32, height: i32, background: &str) -> Result<Self, cairo::Error> {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        let mut canvas = Self {
            surface,
            frame: Frame::new(background),
        };
        if util::name_to_color(background).is_none() {
            warn!("Unknown background color '{}', canvas left transparent", background);
        }
        canvas.redraw();
        Ok(canvas)
    }

    /// Returns the accumulated drawing state.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    /// Reads back the pixel at `(x, y)` as un-premultiplied RGBA bytes.
    ///
    /// Returns `None` for coordinates outside the canvas.
    pub fn pixel(&mut self, x: i32, y: i32) -> Option<[u8; 4]> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return None;
        }
        let stride = self.surface.stride() as usize;
        self.surface.flush();
        let data = self.surface.data().ok()?;
        let offset = y as usize * stride + x as usize * 4;
        let word = u32::from_ne_bytes(data.get(offset..offset + 4)?.try_into().ok()?);

        let a = (word >> 24) as u8;
        let unpremultiply = |c: u32| {
            if a == 0 {
                0
            } else {
                ((c & 0xff) * 255 / a as u32) as u8
            }
        };
        Some([
            unpremultiply(word >> 16),
            unpremultiply(word >> 8),
            unpremultiply(word),
            a,
        ])
    }

    /// Runs `paint` against a fresh context on the image surface.
    fn with_context(&self, paint: impl FnOnce(&cairo::Context)) {
        match cairo::Context::new(&self.surface) {
            Ok(ctx) => paint(&ctx),
            Err(err) => warn!("Failed to create Cairo context: {}", err),
        }
    }

    fn redraw(&mut self) {
        self.with_context(|ctx| {
            ctx.set_operator(cairo::Operator::Clear);
            let _ = ctx.paint();
            ctx.set_operator(cairo::Operator::Over);
            render_frame(ctx, &self.frame);
        });
    }

    fn draw(&mut self, primitive: Primitive) {
        self.with_context(|ctx| render_primitive(ctx, &primitive));
        self.frame.push(primitive);
    }
}

impl DrawingSurface for CairoCanvas {
    fn stroke_segment(&mut self, from: Point, to: Point, paint: &Paint) {
        self.draw(Primitive::Segment {
            from,
            to,
            paint: paint.clone(),
        });
    }

    fn ellipse(&mut self, min: Corner, max: Corner, paint: &Paint) {
        self.draw(Primitive::Ellipse {
            min,
            max,
            paint: paint.clone(),
        });
    }

    fn rectangle(&mut self, min: Corner, max: Corner, paint: &Paint) {
        self.draw(Primitive::Rectangle {
            min,
            max,
            paint: paint.clone(),
        });
    }

    fn polygon(&mut self, points: &[Point], paint: &Paint) {
        self.draw(Primitive::Polygon {
            points: points.to_vec(),
            paint: paint.clone(),
        });
    }

    fn set_background(&mut self, color: &str) {
        if util::name_to_color(color).is_none() {
            warn!("Unknown background color '{}', keeping '{}'", color, self.frame.background);
            return;
        }
        self.frame.set_background(color);
        self.redraw();
    }
}
