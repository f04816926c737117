//! Core engine logic for the terminal: everything here is free of reactive
//! and browser types and runs under host tests.
//!
//! This module provides:
//! - [`CommandRegistry`] - immutable name → async handler mapping
//! - [`Session`] - scrollback, command log, recall cursor, input buffer
//! - [`submit`] and the echo/resolve/settle dispatch phases
//! - [`completion`] - tab completion and ghost-text hints
//! - [`default_registry`] - the built-in command set

pub mod commands;
pub mod completion;
pub mod dispatch;
pub mod error;
mod queue;
mod recall;
mod registry;
mod session;

pub use commands::default_registry;
pub use dispatch::{CLEAR_COMMAND, HandlerVerdict, Resolution, submit};
pub use queue::SubmissionQueue;
pub use recall::{RecallCursor, RecallDirection};
pub use registry::{CommandOutput, CommandRegistry, Handler, HandlerFuture, handler};
pub use session::Session;
