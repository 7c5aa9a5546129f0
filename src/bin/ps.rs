//! PS CLI - train and compare Projective Simulation agents
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`; `-v` raises the
//! default level to `debug`.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ps")]
#[command(version, about = "Projective Simulation agent toolkit", long_about = None)]
struct Cli {
    /// Verbose logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a PS agent in a reference environment
    Train(Box<ps_agent::cli::commands::train::TrainArgs>),

    /// Compare a PS agent with a random baseline
    Compare(Box<ps_agent::cli::commands::compare::CompareArgs>),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Train(args) => ps_agent::cli::commands::train::execute(*args),
        Commands::Compare(args) => ps_agent::cli::commands::compare::execute(*args),
    }
}
