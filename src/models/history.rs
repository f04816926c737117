//! Scrollback entry types for terminal rendering.

use std::sync::atomic::{AtomicUsize, Ordering};

/// A single line of terminal scrollback with a unique ID.
#[derive(Clone, Debug)]
pub struct HistoryEntry {
    /// Unique ID for efficient keying in For loops
    pub id: usize,
    /// The actual entry content
    pub data: EntryData,
}

/// The content of a scrollback entry.
///
/// `Command` is the echo of a submitted line; the remaining variants are
/// output lines produced by the dispatcher or by command handlers.
#[derive(Clone, Debug, PartialEq)]
pub enum EntryData {
    /// Echo of a submitted command, with the prompt shown at submission time.
    ///
    /// `valid` records whether the first token resolved in the registry when
    /// the line was submitted; it is never updated afterwards.
    Command {
        prompt: String,
        text: String,
        valid: bool,
    },
    /// Plain text output
    Text(String),
    /// Error message (red)
    Error(String),
    /// ASCII art, e.g. the startup banner (with glow effect)
    Ascii(String),
    /// Empty line
    Empty,
}

// Global counter for generating unique IDs
static ENTRY_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl HistoryEntry {
    /// Create a new entry with a unique ID.
    pub fn new(data: EntryData) -> Self {
        Self {
            id: ENTRY_COUNTER.fetch_add(1, Ordering::Relaxed),
            data,
        }
    }

    pub fn command(prompt: impl Into<String>, text: impl Into<String>, valid: bool) -> Self {
        Self::new(EntryData::Command {
            prompt: prompt.into(),
            text: text.into(),
            valid,
        })
    }

    pub fn text(s: impl Into<String>) -> Self {
        Self::new(EntryData::Text(s.into()))
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::new(EntryData::Error(s.into()))
    }

    pub fn empty() -> Self {
        Self::new(EntryData::Empty)
    }
}

impl PartialEq for HistoryEntry {
    fn eq(&self, other: &Self) -> bool {
        // Only compare data, not ID
        self.data == other.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_constructors() {
        assert_eq!(
            HistoryEntry::text("hello").data,
            EntryData::Text("hello".to_string())
        );
        assert_eq!(
            HistoryEntry::error("boom").data,
            EntryData::Error("boom".to_string())
        );
        assert_eq!(HistoryEntry::empty().data, EntryData::Empty);
    }

    #[test]
    fn test_command_entry() {
        let entry = HistoryEntry::command("anon@webterm:~", "echo hi", true);
        match entry.data {
            EntryData::Command {
                prompt,
                text,
                valid,
            } => {
                assert_eq!(prompt, "anon@webterm:~");
                assert_eq!(text, "echo hi");
                assert!(valid);
            }
            _ => panic!("Expected Command variant"),
        }
    }

    #[test]
    fn test_unique_ids() {
        let a = HistoryEntry::text("first");
        let b = HistoryEntry::text("second");
        let c = HistoryEntry::text("first"); // Same content as a

        assert_ne!(a.id, b.id);
        assert_ne!(a.id, c.id);
        assert_ne!(b.id, c.id);

        // But content equality works
        assert_eq!(a, c);
    }
}
