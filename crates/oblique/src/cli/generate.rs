//! Generate command handler.

use oblique_error::ObliqueResult;
use oblique_generator::{GeneratorSettings, ObliqueConfig, Orchestrator, RunOutcome};
use oblique_models::{api_key_from_env, GeminiClient};
use oblique_storage::{ArchiveStore, TodayStore};
use std::path::PathBuf;
use std::process::ExitCode;

/// Publish today's question.
///
/// Setup failures (configuration, missing credential) are returned as errors.
/// Run failures are reported through the outcome's exit code.
pub async fn run_generate(
    config_path: Option<PathBuf>,
    archive: Option<PathBuf>,
    today: Option<PathBuf>,
) -> ObliqueResult<ExitCode> {
    let mut config = match config_path {
        Some(path) => ObliqueConfig::from_file(path)?,
        None => ObliqueConfig::load()?,
    };
    if archive.is_some() || today.is_some() {
        let archive = archive.unwrap_or_else(|| config.archive().path().clone());
        let today = today.unwrap_or_else(|| config.archive().today_path().clone());
        config.set_paths(archive, today);
    }

    let generation = config.generation();
    let client = GeminiClient::with_options(
        api_key_from_env()?,
        generation.model().clone(),
        generation.base_url().clone(),
        generation.timeout(),
    )?;

    let mut orchestrator = Orchestrator::new(
        client,
        ArchiveStore::new(config.archive().path().clone()),
        TodayStore::new(config.archive().today_path().clone()),
        GeneratorSettings::from(&config),
    );

    let outcome = orchestrator.run().await;
    match &outcome {
        RunOutcome::Fatal(e) => eprintln!("Error: {}", e),
        published => println!("{}", published),
    }
    Ok(ExitCode::from(outcome.exit_code()))
}
