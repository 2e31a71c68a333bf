//! Rendering primitives and shape definitions (Cairo-based).
//!
//! This module defines the drawing side of the interpreter:
//! - [`ShapeKind`] and [`DrawCommand`]: the closed set of shapes a command can produce
//! - [`DrawingSurface`]: the canvas collaborator receiving primitive calls
//! - [`dispatch`]: the mapping from a command to exactly one primitive
//! - [`Frame`]: recorded canvas state, and [`CairoCanvas`] for pixel output

pub mod color;
pub mod dispatch;
pub mod frame;
pub mod render;
pub mod shape;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use dispatch::dispatch;
pub use frame::{Frame, Primitive};
pub use render::{CairoCanvas, render_frame, render_primitive};
pub use shape::{Corner, DrawCommand, Point, ShapeKind};
pub use surface::{DrawingSurface, Paint};

pub use color::{BLACK, BLUE, GREEN, RED, WHITE};
