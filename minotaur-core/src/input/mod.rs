//! Digital input conditioning
//!
//! Mechanical switches bounce for a few milliseconds around every edge.
//! The filter here turns polled raw levels into a stable logical state.

pub mod debounce;

pub use debounce::{DebounceFilter, Debouncer, DEFAULT_DEBOUNCE_MS};
