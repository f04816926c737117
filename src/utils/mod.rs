//! Utility modules for web, DOM, and data structure operations.
//!
//! Provides:
//! - [`BoundedLog`] - Append-only log with oldest-entry eviction
//! - [`run_with_timeout`] - Handler execution bounded by `Promise.race`
//! - [`dom`] - Browser window/focus helpers

mod bounded;
pub mod dom;
mod timeout;

pub use bounded::BoundedLog;
pub use timeout::run_with_timeout;
