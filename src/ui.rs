//! Terminal presentation of the history and coordinate display.

use crate::input::{CursorPosition, HistoryEntry};

const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Marker printed in front of rejected lines.
pub const INVALID_MARKER: &str = "✗";

/// Marker printed in front of accepted lines.
pub const VALID_MARKER: &str = "✓";

/// Formats a history entry for the scrollback.
///
/// Rejected lines get the [`INVALID_MARKER`] and, when `color` is set, are
/// printed in red so the user can spot the typo.
pub fn format_history_entry(entry: &HistoryEntry, color: bool) -> String {
    if entry.valid {
        format!("{VALID_MARKER} {}", entry.text)
    } else if color {
        format!("{RED}{INVALID_MARKER} {}{RESET}", entry.text)
    } else {
        format!("{INVALID_MARKER} {}", entry.text)
    }
}

/// Text of the coordinate label under the canvas.
pub fn coordinate_label(cursor: CursorPosition) -> String {
    format!("Coordinates: ({}, {})", cursor.x, cursor.y)
}
