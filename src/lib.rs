pub mod config;
pub mod data;
pub mod guard;
pub mod modal;
pub mod ui;
pub mod util;

pub use config::Config;
pub use data::{
    CommitInfo, EditStateReader, EditStateStore, EditedCommitEntry, FieldsBeingEdited,
    InMemoryEditState,
};
pub use guard::{detect_unsaved_edits, SplitGuard, SplitOutcome};
pub use modal::{ChannelModalHost, ModalError, ModalHost, TerminalModalHost};
pub use ui::components::UnsavedEditsChoice;
