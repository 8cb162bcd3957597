//! Modal hosting
//!
//! A [`ModalHost`] shows [`ModalContent`] and resolves with the content's
//! output once the user makes a choice. [`ChannelModalHost`] hands the
//! content to an embedding UI loop; [`TerminalModalHost`] takes over the
//! terminal itself.

mod channel;
mod host;
pub mod mock;
mod terminal;

pub use channel::{ChannelModalHost, ModalRequest};
pub use host::{ModalContent, ModalError, ModalEvent, ModalHost};
pub use mock::{CapturedModal, MockModalHost, MockResponse};
pub use terminal::TerminalModalHost;
