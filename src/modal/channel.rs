//! Modal host that hands requests to an embedding UI loop
//!
//! [`ChannelModalHost::show`] sends a [`ModalRequest`] over an mpsc channel
//! and waits on a oneshot for the answer. The UI loop that owns the receiver
//! draws the pending request and feeds it key presses; dropping a request
//! without answering it resolves the caller with [`ModalError::Closed`].

use async_trait::async_trait;
use crossterm::event::KeyEvent;
use ratatui::{buffer::Buffer, layout::Rect};
use tokio::sync::{mpsc, oneshot};

use super::host::{ModalContent, ModalError, ModalEvent, ModalHost};

/// A modal waiting to be shown by the UI loop
pub struct ModalRequest<C: ModalContent> {
    pub title: String,
    pub content: C,
    responder: oneshot::Sender<Result<C::Output, ModalError>>,
}

impl<C: ModalContent> ModalRequest<C> {
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        self.content.render(&self.title, area, buf);
    }

    /// Forward a key press. Returns the request back while it is still
    /// pending, `None` once it has been answered.
    pub fn handle_key(mut self, key: KeyEvent) -> Option<Self> {
        match self.content.handle_key(key) {
            ModalEvent::Pending => Some(self),
            ModalEvent::Complete(output) => {
                self.respond(Ok(output));
                None
            }
            ModalEvent::Dismiss => {
                self.respond(Err(ModalError::Dismissed));
                None
            }
        }
    }

    /// Answer with a result chosen outside of key handling
    pub fn resolve(self, output: C::Output) {
        self.respond(Ok(output));
    }

    fn respond(self, result: Result<C::Output, ModalError>) {
        if self.responder.send(result).is_err() {
            tracing::debug!(title = %self.title, "Modal caller went away before the result arrived");
        }
    }
}

/// Modal host backed by a channel to the UI loop
pub struct ChannelModalHost<C: ModalContent> {
    tx: mpsc::Sender<ModalRequest<C>>,
}

impl<C: ModalContent> ChannelModalHost<C> {
    /// Create a host and the receiver the UI loop should poll
    pub fn new(buffer: usize) -> (Self, mpsc::Receiver<ModalRequest<C>>) {
        let (tx, rx) = mpsc::channel(buffer.max(1));
        (Self { tx }, rx)
    }
}

impl<C: ModalContent> Clone for ChannelModalHost<C> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

#[async_trait]
impl<C: ModalContent> ModalHost<C> for ChannelModalHost<C> {
    async fn show(&self, title: String, content: C) -> Result<C::Output, ModalError> {
        let (responder, response) = oneshot::channel();
        self.tx
            .send(ModalRequest {
                title,
                content,
                responder,
            })
            .await
            .map_err(|_| ModalError::Host("modal UI loop is not running".to_string()))?;

        response.await.map_err(|_| ModalError::Closed)?
    }
}
