//! Pull command implementation
//!
//! Downloads the remote env file and overwrites the local copy.

use anyhow::Context;

use crate::cli::output::Output;
use crate::core::registry::Registry;
use crate::store::ObjectStore;

/// Run the pull command
pub async fn run_pull(
    registry: &Registry,
    store: &dyn ObjectStore,
    env_name: &str,
) -> anyhow::Result<()> {
    let env = registry.resolve(env_name)?;
    let locator = env.locator()?;

    let spinner = Output::spinner(&format!("Fetching {}...", locator));
    let fetched = store.fetch(&locator, &env.region).await;
    spinner.finish_and_clear();

    // Pulling an environment that was never pushed is an operator mistake,
    // not an empty baseline.
    let remote = fetched?
        .with_context(|| format!("Remote object {} does not exist", locator))?;

    std::fs::write(&env.local, &remote)
        .with_context(|| format!("Failed to write local file {}", env.local))?;

    Output::success(&format!(
        "Pulled {} into {}",
        Output::env_name(&env.name),
        env.local
    ));

    Ok(())
}
