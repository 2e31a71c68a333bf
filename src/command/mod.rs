//! Command grammar for the shape interpreter.
//!
//! Turns a raw line such as `fcircle 100 100 50 red` into a structured
//! [`Command`]. The grammar is driven by the [`KEYWORDS`] table; every
//! entry fixes the exact number of tokens a command must have.

mod grammar;
mod parser;

pub use grammar::{KEYWORDS, Keyword, ShapeTag};
pub use parser::{Command, DEFAULT_COLOR, ParseError, parse};
