//! Init command implementation
//!
//! Scaffolds a default registry file in the working directory.

use std::path::Path;

use anyhow::Context;

use crate::cli::output::Output;
use crate::cli::prompt::ConfirmPrompt;
use crate::core::registry;

/// Outcome of an init attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// Template written.
    Created,
    /// A registry already existed and the operator kept it.
    Skipped,
}

/// Run the init command
pub fn run_init(path: &Path, prompt: &dyn ConfirmPrompt) -> anyhow::Result<InitOutcome> {
    if path.exists() {
        let overwrite = prompt.confirm(
            &format!("{} already exists, overwrite it?", path.display()),
            false,
        )?;
        if !overwrite {
            Output::info("Keeping existing registry");
            return Ok(InitOutcome::Skipped);
        }
    }

    std::fs::write(path, registry::template())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Output::success(&format!("Created {}", path.display()));
    println!();
    println!("Next steps:");
    println!("  edit {} to point at your buckets", path.display());
    println!("  s3env pull --env development");

    Ok(InitOutcome::Created)
}
