//! Oblique CLI binary.
//!
//! - `oblique extract cards|tsv|db <PATH>` rebuilds the question archive
//! - `oblique generate` publishes today's question

use clap::Parser;
use std::process::ExitCode;

mod cli;
mod logging;

#[tokio::main]
async fn main() -> ExitCode {
    use cli::{handle_extract_command, run_generate, Cli, Commands};

    // Load .env before anything reads the environment
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.verbose, cli.json_logs) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let result = match cli.command {
        Commands::Extract(extract_cmd) => {
            handle_extract_command(extract_cmd).map(|()| ExitCode::SUCCESS)
        }
        Commands::Generate {
            config,
            archive,
            today,
        } => run_generate(config, archive, today).await,
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
