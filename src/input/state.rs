//! Interpreter state: routes submitted lines and pointer samples.

use super::events::{CursorPosition, InputEvent};
use super::history::History;
use crate::command::{self, Command};
use crate::draw::{self, DrawingSurface};
use log::debug;

/// Runs one full command cycle for `line`.
///
/// Parses the line, draws the result on `surface` (or changes its
/// background), and appends the raw line to `history` with its validity.
/// Rejected lines leave the surface untouched. Returns whether the line
/// was accepted.
pub fn process_line<S: DrawingSurface + ?Sized>(
    line: &str,
    surface: &mut S,
    history: &mut History,
) -> bool {
    let valid = match command::parse(line) {
        Ok(Command::Draw(cmd)) => {
            draw::dispatch(&cmd, surface);
            true
        }
        Ok(Command::Background(color)) => {
            debug!("Setting background to {}", color);
            surface.set_background(&color);
            true
        }
        Err(err) => {
            debug!("Rejected line: {}", err);
            false
        }
    };
    history.push(line, valid);
    valid
}

/// Session state for one interpreter window.
///
/// Owns the drawing surface, the command history and the last pointer
/// position. All events are handled synchronously, one at a time.
pub struct InterpreterState<S: DrawingSurface> {
    /// Canvas receiving the drawing primitives
    pub surface: S,
    history: History,
    cursor: CursorPosition,
}

impl<S: DrawingSurface> InterpreterState<S> {
    /// Creates a state drawing on `surface` and appending to `history`.
    pub fn new(surface: S, history: History) -> Self {
        Self {
            surface,
            history,
            cursor: CursorPosition::default(),
        }
    }

    /// Submits a command line. Returns whether it was accepted.
    pub fn submit(&mut self, line: &str) -> bool {
        process_line(line, &mut self.surface, &mut self.history)
    }

    /// Records the latest pointer position.
    pub fn on_pointer_motion(&mut self, x: i32, y: i32) {
        self.cursor = CursorPosition { x, y };
    }

    /// Dispatches a front-end event.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Submit(line) => {
                self.submit(&line);
            }
            InputEvent::PointerMotion { x, y } => self.on_pointer_motion(x, y),
        }
    }

    /// Lines submitted so far.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Last known pointer position, `(0, 0)` before any motion.
    pub fn cursor(&self) -> CursorPosition {
        self.cursor
    }

    /// Consumes the state, returning the surface and history.
    pub fn into_parts(self) -> (S, History) {
        (self.surface, self.history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{Frame, Primitive};

    fn create_test_state() -> InterpreterState<Frame> {
        InterpreterState::new(Frame::new("white"), History::new())
    }

    #[test]
    fn valid_line_draws_and_is_recorded() {
        let mut state = create_test_state();
        assert!(state.submit("circle 100 100 50 blue"));

        assert_eq!(state.surface.len(), 1);
        assert!(matches!(
            state.surface.primitives[0],
            Primitive::Ellipse {
                min: (50, 50),
                max: (150, 150),
                ..
            }
        ));
        let entry = state.history().last().unwrap();
        assert_eq!(entry.text, "circle 100 100 50 blue");
        assert!(entry.valid);
    }

    #[test]
    fn invalid_line_leaves_canvas_unchanged() {
        let mut state = create_test_state();
        state.submit("square 0 0 10");
        let before = state.surface.clone();

        assert!(!state.submit("line 0 0 10 abc"));
        assert!(!state.submit("square 10 10 20 20 red"));

        assert_eq!(state.surface, before);
        let flags: Vec<_> = state.history().entries().iter().map(|e| e.valid).collect();
        assert_eq!(flags, [true, false, false]);
        assert_eq!(state.history().entries()[1].text, "line 0 0 10 abc");
    }

    #[test]
    fn background_changes_surface_without_drawing() {
        let mut state = create_test_state();
        assert!(state.submit("background lightblue"));
        assert_eq!(state.surface.background, "lightblue");
        assert!(state.surface.is_empty());

        assert!(!state.submit("background red blue"));
        assert_eq!(state.surface.background, "lightblue");
    }

    #[test]
    fn blank_line_is_recorded_as_invalid() {
        let mut state = create_test_state();
        assert!(!state.submit(""));
        assert_eq!(state.history().len(), 1);
        assert!(!state.history().entries()[0].valid);
    }

    #[test]
    fn stays_responsive_after_many_rejections() {
        let mut state = create_test_state();
        for _ in 0..100 {
            state.submit("nope");
        }
        assert!(state.submit("fsquare 1 1 5 red"));
        assert_eq!(state.history().invalid_count(), 100);
        assert_eq!(state.surface.len(), 1);
    }

    #[test]
    fn pointer_motion_overwrites_cursor() {
        let mut state = create_test_state();
        assert_eq!(state.cursor(), CursorPosition { x: 0, y: 0 });

        state.handle_event(InputEvent::PointerMotion { x: 12, y: 34 });
        state.handle_event(InputEvent::PointerMotion { x: -3, y: 400 });
        assert_eq!(state.cursor(), CursorPosition { x: -3, y: 400 });
        assert!(state.history().is_empty());
    }

    #[test]
    fn submit_event_runs_command_cycle() {
        let mut state = create_test_state();
        state.handle_event(InputEvent::Submit("ftriangle 0 0 10 0 5 8".into()));

        let (frame, history) = state.into_parts();
        assert_eq!(frame.len(), 1);
        assert_eq!(frame.primitives[0].paint().fill.as_deref(), Some("black"));
        assert_eq!(history.valid_count(), 1);
    }
}
