//! Mock modal host for deterministic testing
//!
//! Answers each `show` call from a script instead of drawing anything, and
//! captures every modal it was asked to show.
//!
//! # Example
//! ```no_run
//! use split_confirm::modal::{MockModalHost, MockResponse};
//! use split_confirm::ui::components::{UnsavedEditsChoice, UnsavedEditsDialogState};
//!
//! let host = MockModalHost::<UnsavedEditsDialogState>::new()
//!     .with_response(MockResponse::Resolve(Ok(UnsavedEditsChoice::SaveEdits)));
//! assert_eq!(host.show_count(), 0);
//! ```

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use crossterm::event::KeyEvent;
use parking_lot::Mutex;

use super::host::{ModalContent, ModalError, ModalEvent, ModalHost};

/// How the mock answers one `show` call
#[derive(Debug, Clone)]
pub enum MockResponse<T> {
    /// Return this result without touching the content
    Resolve(Result<T, ModalError>),
    /// Feed these keys to the content until it completes or dismisses
    Keys(Vec<KeyEvent>),
}

/// A modal the mock was asked to show
#[derive(Debug, Clone)]
pub struct CapturedModal<C> {
    pub title: String,
    pub content: C,
}

/// Mock modal host for testing
pub struct MockModalHost<C: ModalContent> {
    responses: Mutex<VecDeque<MockResponse<C::Output>>>,
    captured: Arc<Mutex<Vec<CapturedModal<C>>>>,
}

impl<C> MockModalHost<C>
where
    C: ModalContent + Clone,
    C::Output: Clone,
{
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            captured: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue the answer for the next `show` call
    pub fn with_response(self, response: MockResponse<C::Output>) -> Self {
        self.responses.lock().push_back(response);
        self
    }

    /// Queue a sequence of key presses as the next answer
    pub fn with_keys(self, keys: Vec<KeyEvent>) -> Self {
        self.with_response(MockResponse::Keys(keys))
    }

    /// Modals shown so far, with the content as it was when `show` was called
    pub fn captured(&self) -> Vec<CapturedModal<C>> {
        self.captured.lock().clone()
    }

    pub fn show_count(&self) -> usize {
        self.captured.lock().len()
    }
}

impl<C> Default for MockModalHost<C>
where
    C: ModalContent + Clone,
    C::Output: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<C> ModalHost<C> for MockModalHost<C>
where
    C: ModalContent + Clone,
    C::Output: Clone,
{
    async fn show(&self, title: String, mut content: C) -> Result<C::Output, ModalError> {
        self.captured.lock().push(CapturedModal {
            title,
            content: content.clone(),
        });

        let response = self.responses.lock().pop_front();
        match response {
            Some(MockResponse::Resolve(result)) => result,
            Some(MockResponse::Keys(keys)) => {
                for key in keys {
                    match content.handle_key(key) {
                        ModalEvent::Pending => {}
                        ModalEvent::Complete(output) => return Ok(output),
                        ModalEvent::Dismiss => return Err(ModalError::Dismissed),
                    }
                }
                Err(ModalError::Host("key script ended without a result".to_string()))
            }
            None => Err(ModalError::Host("no scripted response".to_string())),
        }
    }
}
