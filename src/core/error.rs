//! Error types for command execution.
//!
//! A handler failure is terminal to the current submission only: the
//! dispatcher converts it into a visible `command error:` line and the
//! session keeps running.

use thiserror::Error;

/// Errors a command handler can fail with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Required argument was not supplied.
    #[error("missing operand: {0}")]
    MissingOperand(&'static str),
    /// Browser window not available (headless or detached context).
    #[error("browser window not available")]
    NoWindow,
    /// Free-form handler failure.
    #[error("{0}")]
    Failed(String),
}

impl CommandError {
    /// Convenience constructor for free-form failures.
    pub fn failed(msg: impl Into<String>) -> Self {
        Self::Failed(msg.into())
    }
}
