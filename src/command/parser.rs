//! Tokenizing and validating raw command lines.

use super::grammar::Keyword;
use crate::draw::DrawCommand;
use thiserror::Error;

/// Color used when a shape command does not end with a color token.
pub const DEFAULT_COLOR: &str = "black";

/// Outcome of a successfully parsed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Draw a shape on the canvas
    Draw(DrawCommand),
    /// Replace the canvas background with the named color
    Background(String),
}

/// A rejected command line.
///
/// Unknown keywords, wrong token counts and non-integer arguments are all
/// reported the same way; only the offending line is kept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid command: {line:?}")]
pub struct ParseError {
    line: String,
}

impl ParseError {
    fn new(line: &str) -> Self {
        Self {
            line: line.to_string(),
        }
    }

    /// The raw line exactly as submitted.
    pub fn line(&self) -> &str {
        &self.line
    }
}

/// Parses one raw input line.
///
/// The line is split on whitespace. A trailing token made only of alphabetic
/// characters is taken as the color; otherwise the color is
/// [`DEFAULT_COLOR`] and every token after the keyword must be an integer.
/// The token count must match the keyword's arity exactly.
///
/// # Examples
///
/// ```
/// use drawcmd::command::{Command, parse};
///
/// let Ok(Command::Draw(cmd)) = parse("fcircle 100 100 50") else {
///     panic!("expected a shape");
/// };
/// assert!(cmd.filled);
/// assert_eq!(cmd.color, "black");
/// assert!(parse("square 10 10 20 20 red").is_err());
/// ```
pub fn parse(raw: &str) -> Result<Command, ParseError> {
    let invalid = || ParseError::new(raw);
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    let (&first, args) = tokens.split_first().ok_or_else(invalid)?;
    let keyword = Keyword::lookup(first).ok_or_else(invalid)?;

    match keyword {
        Keyword::Background => {
            if tokens.len() != keyword.token_count() {
                return Err(invalid());
            }
            Ok(Command::Background(args[0].to_string()))
        }
        Keyword::Shape { tag, filled } => {
            let color = args.last().copied().filter(|token| is_color_token(token));
            let required = if color.is_some() {
                keyword.token_count()
            } else {
                keyword.token_count() - 1
            };
            if tokens.len() != required {
                return Err(invalid());
            }

            let numbers = args[..tag.arity()]
                .iter()
                .map(|token| token.parse::<i32>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|_| invalid())?;
            let kind = tag.build(&numbers).ok_or_else(invalid)?;

            Ok(Command::Draw(DrawCommand {
                kind,
                filled,
                color: color.unwrap_or(DEFAULT_COLOR).to_string(),
            }))
        }
    }
}

/// A color token is non-empty and purely alphabetic.
fn is_color_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}
