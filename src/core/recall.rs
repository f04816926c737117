//! Command recall: stepping through previously submitted commands.
//!
//! The cursor is a distance back from the most recent submission; `None` is
//! the sentinel meaning "editing fresh input". Stepping past either boundary
//! is an exact no-op (cursor and buffer unchanged) rather than a wrap.

use crate::utils::BoundedLog;

/// Direction of a recall step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecallDirection {
    /// Toward older submissions (ArrowUp).
    Back,
    /// Toward newer submissions (ArrowDown).
    Forward,
}

/// Cursor into the submitted-command log.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RecallCursor {
    /// Distance back from the most recent submission; `None` = not recalling.
    offset: Option<usize>,
}

impl RecallCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the sentinel. Called on submission and on clear.
    pub fn reset(&mut self) {
        self.offset = None;
    }

    /// Whether the cursor is on a recalled entry.
    pub fn is_recalling(&self) -> bool {
        self.offset.is_some()
    }

    /// Step the cursor, returning the new input buffer contents.
    ///
    /// `Some("")` means forward crossed back into fresh-input territory;
    /// `None` means the step hit a boundary and nothing changed.
    pub fn step(&mut self, direction: RecallDirection, log: &BoundedLog<String>) -> Option<String> {
        match direction {
            RecallDirection::Back => self.back(log),
            RecallDirection::Forward => self.forward(log),
        }
    }

    fn back(&mut self, log: &BoundedLog<String>) -> Option<String> {
        let next = match self.offset {
            None => 0,
            Some(d) => d + 1,
        };
        if next >= log.len() {
            return None;
        }
        self.offset = Some(next);
        log.get(log.len() - 1 - next).cloned()
    }

    fn forward(&mut self, log: &BoundedLog<String>) -> Option<String> {
        match self.offset? {
            0 => {
                self.offset = None;
                Some(String::new())
            }
            d => {
                self.offset = Some(d - 1);
                log.get(log.len() - d).cloned()
            }
        }
    }
}
