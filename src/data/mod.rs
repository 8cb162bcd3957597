//! Commit and edit-state models
//!
//! The gate reads per-commit edit state through [`EditStateReader`] and
//! resets it through [`EditStateStore`]. [`InMemoryEditState`] backs the
//! binary and tests; embedding UIs implement the traits over their own store.

mod commit;
mod edit_state;
pub mod mock;
mod schema;
mod state_file;

pub use commit::{CommitInfo, EditedCommitEntry, EditedMessage, FieldsBeingEdited};
pub use edit_state::{CommitEditState, EditStateReader, EditStateStore, InMemoryEditState};
pub use mock::MockEditState;
pub use schema::{CommitMessageSchema, FieldSchemaEntry};
pub use state_file::{StackFile, StateFileError};
