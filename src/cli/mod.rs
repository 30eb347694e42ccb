//! CLI layer
//!
//! Command-line interface using clap.

pub mod commands;
pub mod output;
pub mod prompt;

pub use output::Output;
pub use prompt::{ConfirmPrompt, TerminalPrompt};
