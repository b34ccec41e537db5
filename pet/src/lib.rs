//! Companion-side logic for the desktop pet: configuration, asset lookup,
//! the canned-response chat partner, chat history persistence and popup
//! selection. The GUI layer consumes these crates; nothing here draws.

pub use assets::*;
pub use chat::*;
pub use config::*;
pub use error::*;
pub use history::*;
pub use popup::*;

mod assets;
mod chat;
mod config;
mod error;
mod history;
mod popup;
