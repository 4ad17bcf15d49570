//! Pseudorandom password generation from digit, letter, and punctuation
//! pools, with character blacklists and an interactive console mode.

pub mod cli;
pub mod error;
pub mod logging;
pub mod pass;
pub mod settings;
pub mod terminal;
pub mod tui;

pub use error::{KeygenError, Result};
