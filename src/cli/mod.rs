use crate::errors::AppResult;
use clap::{Parser, Subcommand};
use tracing_subscriber;

pub mod commands;

/// CFPB Consumer Complaint Analyser
#[derive(Parser)]
#[command(name = "complaint-analyser")]
#[command(about = "CFPB Consumer Complaint Analyser")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Validate the complaints CSV and report load statistics
    Validate(commands::validate::ValidateCommand),
    /// Run aggregation analyses over the complaints CSV
    Analyse(commands::analyse::AnalyseCommand),
}

pub fn run() -> AppResult<()> {
    // Initialise tracing subscriber to capture info!() macros
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate(command) => command.run(),
        Commands::Analyse(command) => command.run(),
    }
}
