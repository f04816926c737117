//! Submission queue: strict FIFO ordering for dispatched commands.
//!
//! Each Enter snapshots the buffer and enqueues it; a single drain task
//! pops submissions one at a time, each fully settled before the next
//! resolves. The queue tracks whether a drain is in flight so only one
//! ever runs.

use std::collections::VecDeque;

/// Pending submissions plus the drain-in-flight flag.
#[derive(Debug, Default)]
pub struct SubmissionQueue {
    pending: VecDeque<String>,
    draining: bool,
}

impl SubmissionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a submission. Returns `true` when the caller must start a
    /// drain task; `false` means one is already running and will pick the
    /// entry up in order.
    pub fn enqueue(&mut self, raw: String) -> bool {
        self.pending.push_back(raw);
        if self.draining {
            false
        } else {
            self.draining = true;
            true
        }
    }

    /// Pop the next submission. `None` ends the drain and releases the
    /// flag, so the next [`enqueue`](Self::enqueue) starts a fresh task.
    pub fn next(&mut self) -> Option<String> {
        let item = self.pending.pop_front();
        if item.is_none() {
            self.draining = false;
        }
        item
    }

    /// Whether a drain task is currently in flight.
    pub fn is_draining(&self) -> bool {
        self.draining
    }
}
