mod dialog;
mod unsaved_edits_dialog;

pub use dialog::{DialogFrame, InstructionBar};
pub use unsaved_edits_dialog::{UnsavedEditsChoice, UnsavedEditsDialog, UnsavedEditsDialogState};
