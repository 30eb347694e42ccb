//! CLI command implementations
//!
//! Each command is implemented in its own module.

pub mod init;
pub mod pull;
pub mod push;
