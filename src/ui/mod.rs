pub mod components;
pub mod terminal_guard;

pub use terminal_guard::{install_panic_hook, TerminalGuard};
