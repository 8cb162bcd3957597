//! Terminal state guard for guaranteed cleanup.
//!
//! The terminal modal host enters raw mode and the alternate screen only for
//! the lifetime of a single modal. This guard restores the terminal whether
//! the modal resolves, an error is propagated with `?`, or the task panics.

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

type Restore = fn() -> anyhow::Result<()>;

/// Guard that restores terminal state when dropped.
pub struct TerminalGuard {
    active: bool,
    restore: Restore,
}

impl TerminalGuard {
    /// Enable raw mode and enter the alternate screen. Drop undoes both,
    /// including when entering the alternate screen fails.
    pub fn enter() -> anyhow::Result<Self> {
        Self::enter_with(
            enable_raw_mode,
            || execute!(io::stdout(), EnterAlternateScreen),
            Self::do_cleanup,
        )
    }

    fn enter_with(
        enable_raw: impl FnOnce() -> io::Result<()>,
        enter_screen: impl FnOnce() -> io::Result<()>,
        restore: Restore,
    ) -> anyhow::Result<Self> {
        enable_raw()?;
        let guard = Self {
            active: true,
            restore,
        };
        enter_screen()?;
        Ok(guard)
    }

    /// Perform manual cleanup and prevent Drop from running cleanup again.
    pub fn cleanup(&mut self) -> anyhow::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        (self.restore)()
    }

    fn do_cleanup() -> anyhow::Result<()> {
        let mut stdout = io::stdout();
        disable_raw_mode()?;
        execute!(stdout, LeaveAlternateScreen)?;
        stdout.flush()?;
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active {
            // Can't propagate from Drop
            if let Err(e) = (self.restore)() {
                tracing::debug!(error = %e, "Terminal cleanup failed in Drop");
            }
        }
    }
}

/// Install a panic hook that restores terminal state before printing the panic message.
///
/// Call early in main() before any modal can take over the terminal.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let mut stdout = io::stdout();
        if let Err(e) = disable_raw_mode() {
            tracing::debug!(error = %e, "Failed to disable raw mode in panic hook");
        }
        if let Err(e) = execute!(stdout, LeaveAlternateScreen) {
            tracing::debug!(error = %e, "Failed to restore terminal screen in panic hook");
        }
        if let Err(e) = stdout.flush() {
            tracing::debug!(error = %e, "Failed to flush stdout after panic cleanup");
        }
        original_hook(panic_info);
    }));
}
