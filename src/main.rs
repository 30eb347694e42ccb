//! s3env CLI entry point

use std::path::Path;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use s3env::cli::commands::push::PushOutcome;
use s3env::cli::output::Output;
use s3env::cli::prompt::TerminalPrompt;
use s3env::core::registry::{Registry, REGISTRY_FILE};
use s3env::store::AwsCliStore;

#[derive(Parser)]
#[command(name = "s3env")]
#[command(author, version, about = "Sync local environment files with S3", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Pull the remote env file into the local copy
    Pull {
        /// Environment name (defaults to $ENV)
        #[arg(short, long, env = "ENV")]
        env: Option<String>,
    },
    /// Diff the local env file against the remote copy and upload it
    Push {
        /// Environment name (defaults to $ENV)
        #[arg(short, long, env = "ENV")]
        env: Option<String>,
    },
    /// Create a default .s3env.yaml registry
    Init,
}

const EXIT_FAILURE: u8 = 1;
const EXIT_USAGE: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Pull { env }) => {
            let Some(env) = require_env(env) else {
                return ExitCode::from(EXIT_USAGE);
            };
            run_pull(&env).await
        }
        Some(Commands::Push { env }) => {
            let Some(env) = require_env(env) else {
                return ExitCode::from(EXIT_USAGE);
            };
            match run_push(&env).await {
                Ok(PushOutcome::Pushed) => Ok(()),
                Ok(PushOutcome::Declined) => return ExitCode::from(EXIT_FAILURE),
                Err(e) => Err(e),
            }
        }
        Some(Commands::Init) => {
            let prompt = TerminalPrompt;
            s3env::cli::commands::init::run_init(Path::new(REGISTRY_FILE), &prompt).map(|_| ())
        }
        None => {
            println!("s3env - sync local environment files with S3");
            println!("Run 's3env --help' for usage");
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            Output::error(&format!("{:#}", e));
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

async fn run_pull(env: &str) -> anyhow::Result<()> {
    let registry = load_registry()?;
    let store = AwsCliStore::new();
    s3env::cli::commands::pull::run_pull(&registry, &store, env).await
}

async fn run_push(env: &str) -> anyhow::Result<PushOutcome> {
    let registry = load_registry()?;
    let store = AwsCliStore::new();
    let prompt = TerminalPrompt;
    s3env::cli::commands::push::run_push(&registry, &store, &prompt, env).await
}

/// Reject a missing or empty environment name as a usage error.
///
/// An empty `$ENV` variable counts as unset.
fn require_env(env: Option<String>) -> Option<String> {
    match env {
        Some(name) if !name.is_empty() => Some(name),
        _ => {
            Output::error("No environment specified (use --env or set $ENV)");
            None
        }
    }
}

/// Load the registry from the working directory
fn load_registry() -> anyhow::Result<Registry> {
    let path = Path::new(REGISTRY_FILE);
    if !path.exists() {
        anyhow::bail!("No {} found. Run 's3env init' to create one", REGISTRY_FILE);
    }
    Ok(Registry::load(path)?)
}
