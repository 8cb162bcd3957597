//! Unsaved-edit detection

use crate::data::{CommitInfo, EditStateReader, EditedCommitEntry};

/// Commits from `commits` that have at least one field with an unsaved edit.
///
/// Commits without an edit session, or whose fields are all clean, are
/// skipped. Output keeps input order. Only reads from `reader`.
pub fn detect_unsaved_edits<R>(commits: &[CommitInfo], reader: &R) -> Vec<EditedCommitEntry>
where
    R: EditStateReader + ?Sized,
{
    commits
        .iter()
        .filter_map(|commit| {
            let fields = reader.fields_being_edited(&commit.hash)?;
            EditedCommitEntry::flagged(commit.clone(), fields)
        })
        .collect()
}
