//! Per-commit message edit state
//!
//! The embedding UI owns the real edit state. The split gate only needs to
//! read a snapshot per commit and, when the user discards edits, reset a
//! commit back to its unedited baseline.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use super::commit::{EditedMessage, FieldsBeingEdited};

/// Read-only lookup of unsaved field state, keyed by commit hash
pub trait EditStateReader: Send + Sync {
    /// Current snapshot for `hash`, or `None` if no edit session exists
    fn fields_being_edited(&self, hash: &str) -> Option<FieldsBeingEdited>;
}

/// Edit state that can also be reset
pub trait EditStateStore: EditStateReader {
    /// Clear the fields-being-edited flags and the edited message buffer
    fn reset_edit_state(&self, hash: &str);
}

impl<T: EditStateReader + ?Sized> EditStateReader for Arc<T> {
    fn fields_being_edited(&self, hash: &str) -> Option<FieldsBeingEdited> {
        (**self).fields_being_edited(hash)
    }
}

impl<T: EditStateStore + ?Sized> EditStateStore for Arc<T> {
    fn reset_edit_state(&self, hash: &str) {
        (**self).reset_edit_state(hash)
    }
}

/// Edit session for a single commit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitEditState {
    pub fields: FieldsBeingEdited,
    pub message: EditedMessage,
}

/// Thread-safe in-memory edit state
///
/// Reads and writes are independent per commit; there is no transaction
/// across keys.
#[derive(Debug, Default)]
pub struct InMemoryEditState {
    commits: Mutex<HashMap<String, CommitEditState>>,
}

impl InMemoryEditState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, hash: impl Into<String>, state: CommitEditState) {
        self.commits.lock().insert(hash.into(), state);
    }

    /// Mark a single field as edited with new text
    pub fn edit_field(&self, hash: &str, field: &str, text: impl Into<String>) {
        let mut commits = self.commits.lock();
        let state = commits.entry(hash.to_string()).or_default();
        state.fields.set(field, true);
        state.message.insert(field.to_string(), text.into());
    }

    /// In-progress message for `hash`, if any
    pub fn edited_message(&self, hash: &str) -> Option<EditedMessage> {
        self.commits
            .lock()
            .get(hash)
            .map(|state| state.message.clone())
            .filter(|message| !message.is_empty())
    }

    pub fn len(&self) -> usize {
        self.commits.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.lock().is_empty()
    }
}

impl EditStateReader for InMemoryEditState {
    fn fields_being_edited(&self, hash: &str) -> Option<FieldsBeingEdited> {
        self.commits.lock().get(hash).map(|state| state.fields.clone())
    }
}

impl EditStateStore for InMemoryEditState {
    fn reset_edit_state(&self, hash: &str) {
        if self.commits.lock().remove(hash).is_some() {
            tracing::debug!(hash = %hash, "Reset commit message edit state");
        }
    }
}
