//! Pre-split confirmation gate
//!
//! [`detect_unsaved_edits`] finds the commits whose message has unsaved
//! edits. [`SplitGuard`] runs it and, when anything is flagged, asks the
//! user whether to cancel, discard the edits, or keep them for the split.

mod detector;
mod flow;

pub use detector::detect_unsaved_edits;
pub use flow::{SplitGuard, SplitOutcome};
