//! Recording edit state for deterministic testing
//!
//! Wraps [`InMemoryEditState`] and captures every read and reset so tests
//! can assert exactly which commits the gate touched.
//!
//! # Example
//! ```no_run
//! use split_confirm::data::{EditStateStore, FieldsBeingEdited, MockEditState};
//!
//! let state = MockEditState::new().with_fields("abc", FieldsBeingEdited::new().with("Title", true));
//! state.reset_edit_state("abc");
//! assert_eq!(state.resets(), vec!["abc".to_string()]);
//! ```

use std::sync::Arc;

use parking_lot::Mutex;

use super::commit::{EditedMessage, FieldsBeingEdited};
use super::edit_state::{CommitEditState, EditStateReader, EditStateStore, InMemoryEditState};

/// Mock edit state for testing
#[derive(Debug, Clone, Default)]
pub struct MockEditState {
    inner: Arc<InMemoryEditState>,
    /// Hashes passed to `fields_being_edited`
    captured_reads: Arc<Mutex<Vec<String>>>,
    /// Hashes passed to `reset_edit_state`
    captured_resets: Arc<Mutex<Vec<String>>>,
}

impl MockEditState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a commit with field flags and an empty message buffer
    pub fn with_fields(self, hash: impl Into<String>, fields: FieldsBeingEdited) -> Self {
        self.inner.insert(
            hash,
            CommitEditState {
                fields,
                message: EditedMessage::new(),
            },
        );
        self
    }

    /// Access the wrapped state for assertions on its contents
    pub fn state(&self) -> &InMemoryEditState {
        &self.inner
    }

    /// Get captured reads for assertions
    pub fn reads(&self) -> Vec<String> {
        self.captured_reads.lock().clone()
    }

    /// Get captured resets for assertions
    pub fn resets(&self) -> Vec<String> {
        self.captured_resets.lock().clone()
    }
}

impl EditStateReader for MockEditState {
    fn fields_being_edited(&self, hash: &str) -> Option<FieldsBeingEdited> {
        self.captured_reads.lock().push(hash.to_string());
        self.inner.fields_being_edited(hash)
    }
}

impl EditStateStore for MockEditState {
    fn reset_edit_state(&self, hash: &str) {
        self.captured_resets.lock().push(hash.to_string());
        self.inner.reset_edit_state(hash);
    }
}
