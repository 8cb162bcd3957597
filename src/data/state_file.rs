//! JSON description of a stack about to be split
//!
//! Used by the `split-confirm` binary to seed commits and their edit state.
//!
//! ```json
//! {
//!   "commits": [
//!     { "hash": "a1b2", "title": "Add parser" },
//!     {
//!       "hash": "c3d4",
//!       "title": "Wire parser into CLI",
//!       "fields_being_edited": { "Title": true, "Description": false },
//!       "edited_message": { "Title": "Wire parser into the CLI" }
//!     }
//!   ]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::commit::{CommitInfo, EditedMessage, FieldsBeingEdited};
use super::edit_state::{CommitEditState, InMemoryEditState};

#[derive(Error, Debug)]
pub enum StateFileError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid stack file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Duplicate commit hash in stack file: {0}")]
    DuplicateHash(String),
}

#[derive(Debug, Clone, Deserialize)]
struct StackFileCommit {
    hash: String,
    title: String,
    #[serde(default)]
    fields_being_edited: Option<FieldsBeingEdited>,
    #[serde(default)]
    edited_message: EditedMessage,
}

#[derive(Debug, Clone, Deserialize)]
struct StackFileContents {
    commits: Vec<StackFileCommit>,
}

/// Commits in stack order plus the edit state that applies to them
#[derive(Debug, Default)]
pub struct StackFile {
    pub commits: Vec<CommitInfo>,
    pub edit_state: InMemoryEditState,
}

impl StackFile {
    /// Load and validate a stack file
    pub fn load(path: &Path) -> Result<Self, StateFileError> {
        let raw = fs::read_to_string(path).map_err(|source| StateFileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw).map_err(|err| match err {
            StateFileError::Parse { source, .. } => StateFileError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Parse stack file contents
    pub fn parse(raw: &str) -> Result<Self, StateFileError> {
        let contents: StackFileContents =
            serde_json::from_str(raw).map_err(|source| StateFileError::Parse {
                path: PathBuf::new(),
                source,
            })?;

        let mut stack = StackFile::default();
        for entry in contents.commits {
            if stack.commits.iter().any(|c| c.hash == entry.hash) {
                return Err(StateFileError::DuplicateHash(entry.hash));
            }
            if let Some(fields) = entry.fields_being_edited {
                stack.edit_state.insert(
                    entry.hash.clone(),
                    CommitEditState {
                        fields,
                        message: entry.edited_message,
                    },
                );
            }
            stack.commits.push(CommitInfo::new(entry.hash, entry.title));
        }
        Ok(stack)
    }
}
