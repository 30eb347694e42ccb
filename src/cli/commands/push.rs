//! Push command implementation
//!
//! Shows a diff of local changes against the remote baseline and uploads
//! after explicit confirmation.

use anyhow::Context;

use crate::cli::output::Output;
use crate::cli::prompt::ConfirmPrompt;
use crate::core::registry::Registry;
use crate::diff;
use crate::store::ObjectStore;

/// Outcome of a push attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    /// Local content was written to the remote object.
    Pushed,
    /// Operator declined; nothing was written.
    Declined,
}

/// Run the push command
pub async fn run_push(
    registry: &Registry,
    store: &dyn ObjectStore,
    prompt: &dyn ConfirmPrompt,
    env_name: &str,
) -> anyhow::Result<PushOutcome> {
    let env = registry.resolve(env_name)?;
    let locator = env.locator()?;

    let spinner = Output::spinner(&format!("Fetching {}...", locator));
    let fetched = store.fetch(&locator, &env.region).await;
    spinner.finish_and_clear();

    // A missing remote object is the first push: diff against nothing.
    let baseline = fetched?.unwrap_or_default();

    let local = std::fs::read(&env.local)
        .with_context(|| format!("Failed to read local file {}", env.local))?;

    let rendered = diff::render(
        &String::from_utf8_lossy(&baseline),
        &String::from_utf8_lossy(&local),
    );

    Output::header(&format!(
        "Changes for {} ({})",
        Output::env_name(&env.name),
        locator
    ));
    if rendered.changed {
        print!("{}", rendered.text);
    } else {
        Output::info("No changes between local file and remote object");
    }
    println!();

    if !prompt.confirm(&format!("Push to {}?", locator), true)? {
        Output::warning("Push declined, remote object left unchanged");
        return Ok(PushOutcome::Declined);
    }

    let spinner = Output::spinner(&format!("Uploading {}...", locator));
    let stored = store.store(&locator, &env.region, &env.kms, &local).await;
    spinner.finish_and_clear();
    stored?;

    Output::success(&format!(
        "Pushed {} to {}",
        Output::env_name(&env.name),
        locator
    ));

    Ok(PushOutcome::Pushed)
}
