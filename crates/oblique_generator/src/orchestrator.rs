//! One generation run, from archive load to publication.

use crate::{build_prompt, ObliqueConfig, RunOutcome};
use oblique_core::{pick_one, sample, sanitize, Archive, Question, TodayPointer, Validator};
use oblique_error::{
    GeminiError, GeminiErrorKind, ObliqueError, ObliqueErrorKind, ObliqueResult, ValidationError,
    ValidationErrorKind,
};
use oblique_models::{generate_with_retry, GenerateRequest, GenerationDriver, RetryConfig};
use oblique_storage::{ArchiveStore, TodayStore};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{error, info, instrument, warn};

/// Run parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorSettings {
    /// Smallest archive a run accepts
    pub min_archive_size: usize,
    /// Reference questions per prompt
    pub sample_size: usize,
    /// Retry policy around the service call
    pub retry: RetryConfig,
    /// Acceptance rules for the candidate
    pub validator: Validator,
    /// Model override sent with each request
    pub model: Option<String>,
    /// Sampling temperature
    pub temperature: f64,
    /// Nucleus sampling threshold
    pub top_p: f64,
    /// Upper bound on generated tokens
    pub max_output_tokens: u32,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            min_archive_size: 50,
            sample_size: 12,
            retry: RetryConfig::default(),
            validator: Validator::default(),
            model: None,
            temperature: 0.9,
            top_p: 0.95,
            max_output_tokens: 120,
        }
    }
}

impl From<&ObliqueConfig> for GeneratorSettings {
    fn from(config: &ObliqueConfig) -> Self {
        let generation = config.generation();
        let validation = config.validation();
        Self {
            min_archive_size: *config.archive().min_size(),
            sample_size: *generation.sample_size(),
            retry: RetryConfig::from(*config.retry()),
            validator: Validator::new(*validation.min_chars(), *validation.max_chars()),
            model: Some(generation.model().clone()),
            temperature: *generation.temperature(),
            top_p: *generation.top_p(),
            max_output_tokens: *generation.max_output_tokens(),
        }
    }
}

impl GeneratorSettings {
    fn request(&self, prompt: String) -> ObliqueResult<GenerateRequest> {
        let mut builder = GenerateRequest::builder();
        builder
            .prompt(prompt)
            .temperature(self.temperature)
            .top_p(self.top_p)
            .max_output_tokens(self.max_output_tokens);
        if let Some(model) = &self.model {
            builder.model(model.clone());
        }
        let request = builder.build().map_err(|e| {
            GeminiError::new(GeminiErrorKind::InvalidRequest(e.to_string()))
        })?;
        Ok(request)
    }
}

/// Drives a single generation run.
///
/// The RNG is injectable so sampling and fallback picks are reproducible in
/// tests.
pub struct Orchestrator<D, R = StdRng> {
    driver: D,
    archive_store: ArchiveStore,
    today_store: TodayStore,
    settings: GeneratorSettings,
    rng: R,
}

impl<D: GenerationDriver> Orchestrator<D, StdRng> {
    /// Create an orchestrator seeded from the operating system.
    pub fn new(
        driver: D,
        archive_store: ArchiveStore,
        today_store: TodayStore,
        settings: GeneratorSettings,
    ) -> Self {
        Self::with_rng(
            driver,
            archive_store,
            today_store,
            settings,
            StdRng::from_entropy(),
        )
    }
}

impl<D: GenerationDriver, R: Rng> Orchestrator<D, R> {
    /// Create an orchestrator with an explicit RNG.
    pub fn with_rng(
        driver: D,
        archive_store: ArchiveStore,
        today_store: TodayStore,
        settings: GeneratorSettings,
        rng: R,
    ) -> Self {
        Self {
            driver,
            archive_store,
            today_store,
            settings,
            rng,
        }
    }

    /// The generation backend.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Run parameters.
    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Generate, validate and publish today's question.
    ///
    /// On success the today file is written first, then the archive is
    /// extended and saved. A service that is still rate limited after the
    /// last attempt republishes a random archived question and leaves the
    /// archive alone. Every other failure writes nothing.
    #[instrument(
        skip(self),
        fields(
            archive = %self.archive_store.path().display(),
            provider = self.driver.provider_name()
        )
    )]
    pub async fn run(&mut self) -> RunOutcome {
        let archive = match self.archive_store.load_with_min(self.settings.min_archive_size) {
            Ok(archive) => archive,
            Err(e) => {
                error!(error = %e, "Archive unavailable");
                return RunOutcome::Fatal(e.into());
            }
        };

        match self.generate(&archive).await {
            Ok(question) => match self.publish(archive, question.clone()) {
                Ok(()) => {
                    info!(question = %question, "Generated new question");
                    RunOutcome::Success { question }
                }
                Err(e) => {
                    error!(error = %e, "Failed to publish generated question");
                    RunOutcome::Fatal(e)
                }
            },
            Err(e) => match rate_limit_status(&e) {
                Some(status) => self.fall_back(&archive, status, e),
                None => {
                    error!(error = %e, "Generation failed");
                    RunOutcome::Fatal(e)
                }
            },
        }
    }

    async fn generate(&mut self, archive: &Archive) -> ObliqueResult<Question> {
        let references = sample(archive, self.settings.sample_size, &mut self.rng)?;
        let prompt = build_prompt(&references);
        let request = self.settings.request(prompt)?;

        let response = generate_with_retry(&self.driver, &request, &self.settings.retry).await?;
        let text = sanitize(response.text());

        if let Err(reason) = self.settings.validator.check(&text) {
            return Err(ValidationError::new(ValidationErrorKind::Rejected {
                text,
                reason: reason.to_string(),
            })
            .into());
        }
        if archive.contains(&text) {
            return Err(ValidationError::new(ValidationErrorKind::Duplicate(text)).into());
        }

        Ok(Question::new(text))
    }

    fn publish(&self, archive: Archive, question: Question) -> ObliqueResult<()> {
        self.today_store.write(&TodayPointer::new(question.clone()))?;
        let archive = archive.append(question);
        self.archive_store.save(&archive)?;
        Ok(())
    }

    fn fall_back(&mut self, archive: &Archive, status: u16, cause: ObliqueError) -> RunOutcome {
        let Some(question) = pick_one(archive, &mut self.rng) else {
            error!(error = %cause, "Rate limited with an empty archive");
            return RunOutcome::Fatal(cause);
        };

        if let Err(e) = self.today_store.write(&TodayPointer::new(question.clone())) {
            error!(error = %e, "Failed to write fallback question");
            return RunOutcome::Fatal(e.into());
        }

        warn!(status, question = %question, "Service rate limited, fell back to archive");
        RunOutcome::Fallback { question, status }
    }
}

fn rate_limit_status(err: &ObliqueError) -> Option<u16> {
    match err.kind() {
        ObliqueErrorKind::Gemini(e) if e.is_rate_limited() => e.kind.status_code(),
        _ => None,
    }
}
