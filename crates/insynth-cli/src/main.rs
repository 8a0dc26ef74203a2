//! insynth CLI - perturb audio files for robustness testing.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "insynth")]
#[command(author, version, about = "Audio perturbation for robustness testing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Perturb one audio file with a suite or a single perturbator
    Perturb(commands::perturb::PerturbArgs),

    /// Write several perturbed variants of a file per perturbator
    Batch(commands::batch::BatchArgs),

    /// List available perturbators
    List(commands::list::ListArgs),

    /// Show the files a sound bank resolves to
    Bank(commands::bank::BankArgs),
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so `list --json` output stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();
    tracing_log::LogTracer::init().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Perturb(args) => commands::perturb::run(args),
        Commands::Batch(args) => commands::batch::run(args),
        Commands::List(args) => commands::list::run(args),
        Commands::Bank(args) => commands::bank::run(args),
    }
}
