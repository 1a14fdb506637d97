//! Interactive chat mode.
//!
//! A REPL over [`crate::controller::ChatController`] with slash commands for
//! feedback and session housekeeping.

/// Slash command parsing and autocomplete.
pub mod command;
mod repl;
mod ui;

pub use repl::{Repl, ReplConfig};
