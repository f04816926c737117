//! Session state: scrollback, submitted-command log, recall cursor, and the
//! in-progress input buffer.
//!
//! The session owns every piece of mutable engine state and exposes the
//! state transitions the dispatcher drives. It is deliberately free of
//! reactive or browser types so the whole engine is testable on the host;
//! the Leptos layer wraps a `Session` in a signal.

use crate::config::{ASCII_BANNER, MAX_COMMAND_LOG, MAX_SCROLLBACK, WELCOME_TEXT};
use crate::core::recall::{RecallCursor, RecallDirection};
use crate::models::{EntryData, HistoryEntry};
use crate::utils::BoundedLog;

/// One terminal session's state.
#[derive(Clone, Debug)]
pub struct Session {
    /// Displayed scrollback (command echoes and output lines).
    scrollback: BoundedLog<HistoryEntry>,
    /// Entries restored on clear; the screen is never reset to empty.
    banner: Vec<EntryData>,
    /// Raw submitted command strings, used exclusively for recall.
    command_log: BoundedLog<String>,
    recall: RecallCursor,
    /// The not-yet-submitted text being edited.
    input: String,
    prompt: String,
}

impl Session {
    /// Session seeded with the configured startup banner.
    pub fn new() -> Self {
        Self::with_banner(vec![
            EntryData::Ascii(ASCII_BANNER.trim_end().to_string()),
            EntryData::Empty,
            EntryData::Text(WELCOME_TEXT.to_string()),
        ])
    }

    /// Session seeded with custom banner entries (tests, embedding).
    pub fn with_banner(banner: Vec<EntryData>) -> Self {
        let mut session = Self {
            scrollback: BoundedLog::new(MAX_SCROLLBACK),
            banner,
            command_log: BoundedLog::new(MAX_COMMAND_LOG),
            recall: RecallCursor::new(),
            input: String::new(),
            prompt: crate::config::prompt(),
        };
        session.seed_banner();
        session
    }

    fn seed_banner(&mut self) {
        let banner = self.banner.clone();
        self.scrollback
            .extend(banner.into_iter().map(HistoryEntry::new));
    }

    // =========================================================================
    // Rendering queries
    // =========================================================================

    /// Scrollback entries, oldest first.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.scrollback.to_vec()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// The in-progress input buffer.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The submitted-command log, oldest first.
    pub fn command_log(&self) -> &BoundedLog<String> {
        &self.command_log
    }

    // =========================================================================
    // Input buffer
    // =========================================================================

    /// Replace the buffer with what the input widget now holds.
    ///
    /// Ordinary edits do not reset the recall cursor; recall resumes from
    /// the same position until a submission or clear resets it.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Snapshot and clear the buffer at submission time.
    ///
    /// Each queued submission carries its own snapshot, so text typed while
    /// a previous command is still resolving is never lost or re-dispatched.
    pub fn take_input(&mut self) -> String {
        std::mem::take(&mut self.input)
    }

    /// Step the recall cursor and mirror the recalled command into the
    /// buffer. Returns the new buffer contents, or `None` for a boundary
    /// no-op (buffer unchanged).
    pub fn recall(&mut self, direction: RecallDirection) -> Option<String> {
        let text = self.recall.step(direction, &self.command_log)?;
        self.input = text.clone();
        Some(text)
    }

    // =========================================================================
    // Scrollback mutation (driven by the dispatcher)
    // =========================================================================

    /// Append a command echo carrying the prompt shown at submission time.
    pub fn push_echo(&mut self, text: &str, valid: bool) {
        let prompt = self.prompt.clone();
        self.scrollback
            .push(HistoryEntry::command(prompt, text, valid));
    }

    /// Append one output entry. Newlines stay inside the single entry; an
    /// empty string becomes a blank line.
    pub fn push_output(&mut self, text: &str) {
        let entry = if text.is_empty() {
            HistoryEntry::empty()
        } else {
            HistoryEntry::text(text)
        };
        self.scrollback.push(entry);
    }

    /// Append one error entry.
    pub fn push_error(&mut self, text: impl Into<String>) {
        self.scrollback.push(HistoryEntry::error(text));
    }

    /// The clear action: reset the scrollback to the banner seed.
    ///
    /// The command log is untouched; recall still works after a clear.
    pub fn reset_screen(&mut self) {
        self.scrollback.clear();
        self.seed_banner();
    }

    /// Settle a submission: record the trimmed text for recall (never the
    /// empty string) and reset the recall cursor.
    ///
    /// The input buffer is not touched here; it was snapshotted and cleared
    /// at submission time by [`Session::take_input`], so text typed while a
    /// queued command is still resolving survives.
    pub fn settle(&mut self, trimmed: &str) {
        if !trimmed.is_empty() {
            self.command_log.push(trimmed.to_string());
        }
        self.recall.reset();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
