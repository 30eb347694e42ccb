//! s3env library
//!
//! Keeps a local environment-variable file in sync with an object in S3.
//! The binary in `main.rs` is a thin clap layer over the command handlers
//! in [`cli::commands`].

pub mod cli;
pub mod core;
pub mod diff;
pub mod store;
pub mod util;
