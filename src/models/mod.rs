//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`HistoryEntry`], [`EntryData`] - Terminal scrollback entries

mod history;

pub use history::{EntryData, HistoryEntry};
