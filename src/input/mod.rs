//! Input handling for the interpreter.
//!
//! This module connects a front-end to the core: submitted command lines are
//! parsed, drawn and recorded in the [`History`], and pointer samples update
//! the [`CursorPosition`] shown to the user.

pub mod events;
pub mod history;
pub mod state;

// Re-export commonly used types at module level
pub use events::{CursorPosition, InputEvent};
pub use history::{History, HistoryEntry};
pub use state::{InterpreterState, process_line};
