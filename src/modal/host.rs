use async_trait::async_trait;
use crossterm::event::KeyEvent;
use ratatui::{buffer::Buffer, layout::Rect};
use thiserror::Error;

/// Ways a modal can end without producing a result
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModalError {
    #[error("Modal dismissed without a choice")]
    Dismissed,
    #[error("Modal host closed before returning a result")]
    Closed,
    #[error("Modal host failed: {0}")]
    Host(String),
}

/// What a key press did to a modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalEvent<T> {
    /// Still waiting for the user
    Pending,
    /// The user made a definitive choice
    Complete(T),
    /// The user closed the modal without choosing
    Dismiss,
}

/// Content rendered inside a modal.
///
/// The host owns the content for the lifetime of the modal, draws it, and
/// forwards key presses until [`ModalEvent::Complete`] or
/// [`ModalEvent::Dismiss`] is returned. Either ends the modal, so a result
/// is produced at most once.
pub trait ModalContent: Send + 'static {
    /// Result type the modal resolves with
    type Output: Send + 'static;

    /// Draw the modal over `area`
    fn render(&self, title: &str, area: Rect, buf: &mut Buffer);

    /// Handle a key press
    fn handle_key(&mut self, key: KeyEvent) -> ModalEvent<Self::Output>;
}

/// Displays modal content and returns the user's choice
#[async_trait]
pub trait ModalHost<C: ModalContent>: Send + Sync {
    /// Show `content` titled `title` and wait for it to resolve
    async fn show(&self, title: String, content: C) -> Result<C::Output, ModalError>;
}
