//! Input event types delivered by a front-end.

/// Last known pointer position over the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorPosition {
    pub x: i32,
    pub y: i32,
}

/// Events the interpreter reacts to.
///
/// Pressing Return in the entry field and clicking the draw button both
/// arrive as [`InputEvent::Submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A command line was submitted
    Submit(String),
    /// The pointer moved over the canvas
    PointerMotion {
        /// Pointer X coordinate in canvas pixels
        x: i32,
        /// Pointer Y coordinate in canvas pixels
        y: i32,
    },
}
