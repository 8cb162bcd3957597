use std::collections::HashSet;

use crate::config::Config;
use crate::data::{CommitInfo, EditStateStore};
use crate::modal::{ModalError, ModalHost};
use crate::ui::components::{UnsavedEditsChoice, UnsavedEditsDialogState};

use super::detector::detect_unsaved_edits;

/// How a confirmation ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitOutcome {
    /// No commit had unsaved edits; no modal was shown
    NothingUnsaved,
    /// The user picked a button
    Chose(UnsavedEditsChoice),
    /// The modal ended without a choice
    Aborted(ModalError),
}

impl SplitOutcome {
    /// Whether the caller may go ahead with the split
    pub fn proceeds(&self) -> bool {
        match self {
            SplitOutcome::NothingUnsaved => true,
            SplitOutcome::Chose(choice) => choice.proceeds(),
            SplitOutcome::Aborted(_) => false,
        }
    }
}

/// Gate run before splitting commits.
///
/// Holds the edit state to inspect and the host used to ask the user.
/// Concurrent calls are not coordinated; each one may open its own modal.
pub struct SplitGuard<S, H> {
    state: S,
    host: H,
    config: Config,
}

impl<S, H> SplitGuard<S, H>
where
    S: EditStateStore,
    H: ModalHost<UnsavedEditsDialogState>,
{
    pub fn new(state: S, host: H) -> Self {
        Self {
            state,
            host,
            config: Config::default(),
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns `true` when the split may proceed.
    ///
    /// Resolves immediately when nothing is unsaved. Otherwise asks the user
    /// to cancel, discard or save; a modal that ends without a choice counts
    /// as cancel.
    pub async fn confirm_before_proceeding(&self, commits: &[CommitInfo]) -> bool {
        self.confirm(commits).await.proceeds()
    }

    /// Same as [`confirm_before_proceeding`](Self::confirm_before_proceeding)
    /// but reports how the decision was reached
    pub async fn confirm(&self, commits: &[CommitInfo]) -> SplitOutcome {
        let flagged = detect_unsaved_edits(commits, &self.state);
        if flagged.is_empty() {
            tracing::debug!(
                commits = commits.len(),
                "No unsaved commit message edits, split may proceed"
            );
            return SplitOutcome::NothingUnsaved;
        }

        tracing::info!(
            commits = commits.len(),
            flagged = flagged.len(),
            "Unsaved commit message edits found before split"
        );

        let hashes: Vec<String> = flagged.iter().map(|e| e.commit.hash.clone()).collect();
        let dialog = UnsavedEditsDialogState::new(flagged, self.config.schema.clone())
            .with_selected(self.config.default_button)
            .with_width(self.config.dialog_width);

        match self.host.show(self.config.dialog_title.clone(), dialog).await {
            Ok(choice) => {
                self.apply(choice, &hashes);
                SplitOutcome::Chose(choice)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Unsaved edits modal ended without a choice, not splitting");
                SplitOutcome::Aborted(e)
            }
        }
    }

    fn apply(&self, choice: UnsavedEditsChoice, hashes: &[String]) {
        match choice {
            UnsavedEditsChoice::Cancel => {
                tracing::info!("Split cancelled to keep unsaved edits");
            }
            UnsavedEditsChoice::DiscardEdits => {
                let mut seen = HashSet::new();
                for hash in hashes.iter().filter(|h| seen.insert(h.as_str())) {
                    self.state.reset_edit_state(hash);
                }
                tracing::info!(count = seen.len(), "Discarded unsaved commit message edits");
            }
            UnsavedEditsChoice::SaveEdits => {
                // Edits stay in place; the split reads them as the commits' text
                tracing::info!(count = hashes.len(), "Keeping unsaved edits for split");
            }
        }
    }
}
