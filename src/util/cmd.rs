//! Command logging utilities for verbose output.

use tokio::process::Command;
use tracing::debug;

/// Log a subprocess invocation just before execution.
///
/// Emits a `tracing::debug!` event with the program name and arguments.
/// Visible via `RUST_LOG=s3env=debug`.
pub fn log_cmd(cmd: &Command) {
    let std_cmd = cmd.as_std();
    let program = std_cmd.get_program().to_string_lossy();
    let args: Vec<_> = std_cmd.get_args().map(|a| a.to_string_lossy()).collect();
    debug!(
        target: "s3env::cmd",
        %program,
        ?args,
        "exec"
    );
}
