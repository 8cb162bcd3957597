//! Shared test utilities
//!
//! - Stack fixtures with seeded edit state
//! - TUI terminal testing helpers

pub mod terminal;
