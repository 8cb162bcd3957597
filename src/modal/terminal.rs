//! Standalone modal host that takes over the terminal
//!
//! Used when there is no surrounding UI loop (the `split-confirm` binary).
//! Raw mode and the alternate screen are held only while the modal is up.

use std::io;
use std::time::Duration;

use async_trait::async_trait;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::host::{ModalContent, ModalError, ModalEvent, ModalHost};
use crate::ui::terminal_guard::TerminalGuard;

/// Modal host drawing directly to stdout
#[derive(Debug, Clone)]
pub struct TerminalModalHost {
    frame_interval: Duration,
}

impl TerminalModalHost {
    pub fn new() -> Self {
        Self {
            frame_interval: Duration::from_millis(16),
        }
    }

    async fn run<C: ModalContent>(
        &self,
        title: &str,
        content: &mut C,
    ) -> anyhow::Result<Result<C::Output, ModalError>> {
        let mut guard = TerminalGuard::enter()?;

        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let outcome = loop {
            terminal.draw(|f| {
                let area = f.area();
                content.render(title, area, f.buffer_mut());
            })?;

            tokio::time::sleep(self.frame_interval).await;
            if !event::poll(Duration::from_millis(0))? {
                continue;
            }

            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                break Err(ModalError::Dismissed);
            }
            match content.handle_key(key) {
                ModalEvent::Pending => {}
                ModalEvent::Complete(output) => break Ok(output),
                ModalEvent::Dismiss => break Err(ModalError::Dismissed),
            }
        };

        guard.cleanup()?;
        terminal.show_cursor()?;
        Ok(outcome)
    }
}

impl Default for TerminalModalHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<C: ModalContent> ModalHost<C> for TerminalModalHost {
    async fn show(&self, title: String, mut content: C) -> Result<C::Output, ModalError> {
        tracing::debug!(title = %title, "Showing terminal modal");
        match self.run(&title, &mut content).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(error = %e, "Terminal modal host failed");
                Err(ModalError::Host(e.to_string()))
            }
        }
    }
}
