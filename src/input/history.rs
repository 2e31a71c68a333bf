//! Append-only scrollback of submitted command lines.

/// One submitted line and whether it was accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// The line exactly as the user typed it
    pub text: String,
    /// `true` if the line was drawn (or set the background)
    pub valid: bool,
}

/// Ordered record of every submitted line.
///
/// Entries are only ever appended; nothing is edited or removed for the
/// lifetime of the history.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line with its validity flag.
    pub fn push(&mut self, text: &str, valid: bool) {
        self.entries.push(HistoryEntry {
            text: text.to_string(),
            valid,
        });
    }

    /// All entries in arrival order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// The most recently appended entry.
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Number of recorded entries, valid or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` before the first line is submitted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of accepted entries.
    pub fn valid_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.valid).count()
    }

    /// Number of rejected entries.
    pub fn invalid_count(&self) -> usize {
        self.len() - self.valid_count()
    }
}
