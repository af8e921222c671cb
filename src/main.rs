mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
mod ui;
mod workflow;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::cmd::config::{self as config_cmd, ConfigArgs};
use crate::cmd::suggest::{self, SuggestArgs};
use crate::error::AppResult;

#[derive(Parser)]
#[command(
    name = "jira-branch",
    author,
    version,
    about = "Suggest git branch names for a Jira ticket"
)]
struct Cli {
    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a ticket and pick one of the suggested branch names (default).
    Suggest(SuggestArgs),
    /// Inspect the environment configuration.
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(error) = run(cli).await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "jira_branch=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> AppResult<()> {
    match cli.command.unwrap_or_else(|| Commands::Suggest(SuggestArgs::default())) {
        Commands::Config(args) => config_cmd::run(args.command),
        Commands::Suggest(args) => {
            let outcome = suggest::run(args).await?;
            tracing::debug!(
                ticket = %outcome.ticket.key,
                summary = %outcome.ticket.summary,
                branch = %outcome.branch,
                "suggestion session finished"
            );
            Ok(())
        }
    }
}
