//! End-to-end flow through the channel host, as an embedding UI would run it
//!
//! The gate runs on its own task; the test plays the UI loop: it receives
//! the modal request, draws it, and feeds it key presses.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use split_confirm::modal::ModalRequest;
use split_confirm::ui::components::UnsavedEditsDialogState;
use split_confirm::{
    ChannelModalHost, EditStateReader, InMemoryEditState, SplitGuard, SplitOutcome,
    UnsavedEditsChoice,
};
use tokio::sync::mpsc;

use super::common::fixtures::{clean_session, edits, stack};
use super::common::terminal::{buffer_to_string, create_test_terminal};

type Guard = SplitGuard<Arc<InMemoryEditState>, ChannelModalHost<UnsavedEditsDialogState>>;
type Requests = mpsc::Receiver<ModalRequest<UnsavedEditsDialogState>>;

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn setup(state: InMemoryEditState) -> (Arc<Guard>, Arc<InMemoryEditState>, Requests) {
    let state = Arc::new(state);
    let (host, rx) = ChannelModalHost::new(4);
    (Arc::new(SplitGuard::new(Arc::clone(&state), host)), state, rx)
}

/// Play the UI loop: answer the next modal with `keys`
async fn answer_with(rx: &mut Requests, keys: Vec<KeyEvent>) -> String {
    let mut request = rx.recv().await.expect("expected a modal request");
    let mut terminal = create_test_terminal();
    terminal
        .draw(|f| request.render(f.area(), f.buffer_mut()))
        .expect("Failed to draw modal");
    let screen = buffer_to_string(terminal.backend().buffer());

    for key in keys {
        match request.handle_key(key) {
            Some(pending) => request = pending,
            None => return screen,
        }
    }
    panic!("modal still pending after scripted keys");
}

/// Example 1: only the edited commit is listed
#[tokio::test]
async fn test_lists_only_edited_commit() {
    let (guard, _state, mut rx) = setup(edits(&[("b", "Title")]));
    let commits = stack(&[("a", "Add config loader"), ("b", "Use config in CLI")]);

    let task = {
        let guard = Arc::clone(&guard);
        tokio::spawn(async move { guard.confirm(&commits).await })
    };
    let screen = answer_with(&mut rx, vec![press(KeyCode::Char('s'))]).await;

    assert_eq!(
        task.await.unwrap(),
        SplitOutcome::Chose(UnsavedEditsChoice::SaveEdits)
    );
    assert!(screen.contains("Use config in CLI"));
    assert!(!screen.contains("Add config loader"));
    assert!(screen.contains("unsaved changes to ◆ Title"));
}

/// Example 2: nothing edited, no modal
#[tokio::test]
async fn test_clean_stack_skips_modal() {
    let state = InMemoryEditState::new();
    clean_session(&state, "c", &["Title", "Description"]);
    let (guard, _state, mut rx) = setup(state);
    let commits = stack(&[("a", "One"), ("c", "Two")]);

    assert!(guard.confirm_before_proceeding(&commits).await);
    assert!(rx.try_recv().is_err());
}

/// Example 3: discarding resets the flagged commit
#[tokio::test]
async fn test_discard_resets_state() {
    let state = edits(&[("b", "Title")]);
    clean_session(&state, "x", &["Title"]);
    let (guard, state, mut rx) = setup(state);
    let commits = stack(&[("b", "Reword me"), ("x", "Untouched")]);

    let task = {
        let guard = Arc::clone(&guard);
        tokio::spawn(async move { guard.confirm_before_proceeding(&commits).await })
    };
    // Cancel -> Discard Edits, then Enter
    answer_with(&mut rx, vec![press(KeyCode::Tab), press(KeyCode::Enter)]).await;

    assert!(task.await.unwrap());
    assert!(state.fields_being_edited("b").is_none());
    assert!(state.edited_message("b").is_none());
    assert!(state.fields_being_edited("x").is_some());
}

/// Example 4: empty input
#[tokio::test]
async fn test_empty_stack() {
    let (guard, _state, mut rx) = setup(edits(&[("b", "Title")]));

    assert!(guard.confirm_before_proceeding(&[]).await);
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_cancel_keeps_edits() {
    let (guard, state, mut rx) = setup(edits(&[("b", "Title"), ("b", "Description")]));
    let commits = stack(&[("b", "Reword me")]);

    let task = {
        let guard = Arc::clone(&guard);
        tokio::spawn(async move { guard.confirm_before_proceeding(&commits).await })
    };
    answer_with(&mut rx, vec![press(KeyCode::Enter)]).await;

    assert!(!task.await.unwrap());
    let message = state.edited_message("b").unwrap();
    assert_eq!(message.get("Description").map(String::as_str), Some("edited Description"));
}

#[tokio::test]
async fn test_ui_loop_dropping_request_aborts() {
    let (guard, state, mut rx) = setup(edits(&[("b", "Title")]));
    let commits = stack(&[("b", "Reword me")]);

    let task = {
        let guard = Arc::clone(&guard);
        tokio::spawn(async move { guard.confirm(&commits).await })
    };
    drop(rx.recv().await.unwrap());

    assert_eq!(
        task.await.unwrap(),
        SplitOutcome::Aborted(split_confirm::ModalError::Closed)
    );
    assert!(state.fields_being_edited("b").is_some());
}

#[tokio::test]
async fn test_escape_aborts() {
    let (guard, _state, mut rx) = setup(edits(&[("b", "Title")]));
    let commits = stack(&[("b", "Reword me")]);

    let task = {
        let guard = Arc::clone(&guard);
        tokio::spawn(async move { guard.confirm_before_proceeding(&commits).await })
    };
    answer_with(&mut rx, vec![press(KeyCode::Esc)]).await;

    assert!(!task.await.unwrap());
}
