//! Commit identity and per-commit message edit models

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A commit as seen by the split gate. Owned by the caller; read-only here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommitInfo {
    /// Stable commit hash
    pub hash: String,
    /// First line of the commit message
    pub title: String,
}

impl CommitInfo {
    pub fn new(hash: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            title: title.into(),
        }
    }

    /// Short form of the hash for display (first 12 characters)
    pub fn short_hash(&self) -> &str {
        match self.hash.char_indices().nth(12) {
            Some((idx, _)) => &self.hash[..idx],
            None => &self.hash,
        }
    }
}

/// Which commit message fields currently have unsaved edits.
///
/// Keys are schema field keys (e.g. `Title`, `Description`). A `false` value
/// means the field was opened for editing but holds no unsaved change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldsBeingEdited(BTreeMap<String, bool>);

impl FieldsBeingEdited {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, field: impl Into<String>, editing: bool) -> Self {
        self.set(field, editing);
        self
    }

    pub fn set(&mut self, field: impl Into<String>, editing: bool) {
        self.0.insert(field.into(), editing);
    }

    pub fn get(&self, field: &str) -> bool {
        self.0.get(field).copied().unwrap_or(false)
    }

    /// True if at least one field holds an unsaved edit
    pub fn any_edited(&self) -> bool {
        self.0.values().any(|editing| *editing)
    }

    /// Keys of the fields with unsaved edits, in key order
    pub fn edited_fields(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(|(_, editing)| **editing)
            .map(|(field, _)| field.as_str())
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for FieldsBeingEdited {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// In-progress commit message text, keyed by field
pub type EditedMessage = BTreeMap<String, String>;

/// A commit flagged by the detector, paired with its edited fields.
///
/// Only constructed for snapshots where [`FieldsBeingEdited::any_edited`]
/// holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditedCommitEntry {
    pub commit: CommitInfo,
    pub fields: FieldsBeingEdited,
}

impl EditedCommitEntry {
    /// Pair a commit with its snapshot, or `None` when nothing is edited
    pub fn flagged(commit: CommitInfo, fields: FieldsBeingEdited) -> Option<Self> {
        fields.any_edited().then_some(Self { commit, fields })
    }
}
