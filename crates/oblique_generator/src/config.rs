//! Layered configuration.
//!
//! Sources, lowest precedence first:
//! - Bundled defaults (include_str! from oblique.toml)
//! - `~/.config/oblique/oblique.toml`
//! - `./oblique.toml`
//! - Environment variables `OBLIQUE__<SECTION>__<KEY>`
//!
//! `GEMINI_MODEL`, when set, replaces `generation.model`.

use config::{Config, Environment, File, FileFormat};
use derive_getters::Getters;
use oblique_error::{ConfigError, ObliqueResult};
use oblique_models::RetryConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../oblique.toml");

/// Where the archive and today files live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct ArchiveSettings {
    /// Archive file (JSON array of strings)
    path: PathBuf,
    /// Today pointer file (`{"q": ...}`)
    today_path: PathBuf,
    /// Smallest archive the generator will run against
    min_size: usize,
}

/// Generation service parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct GenerationSettings {
    /// Model identifier
    model: String,
    /// REST base URL
    base_url: String,
    /// Reference questions embedded in each prompt
    sample_size: usize,
    /// Sampling temperature
    temperature: f64,
    /// Nucleus sampling threshold
    top_p: f64,
    /// Upper bound on generated tokens
    max_output_tokens: u32,
    /// HTTP request timeout in seconds
    timeout_secs: u64,
}

impl GenerationSettings {
    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Retry policy for the generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct RetrySettings {
    /// Total attempts including the first
    max_attempts: u32,
    /// Linear backoff unit in milliseconds
    backoff_step_ms: u64,
}

impl From<RetrySettings> for RetryConfig {
    fn from(settings: RetrySettings) -> Self {
        RetryConfig::new(
            settings.max_attempts,
            Duration::from_millis(settings.backoff_step_ms),
        )
    }
}

/// Length bounds for generated questions, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ValidationSettings {
    /// Inclusive minimum
    min_chars: usize,
    /// Inclusive maximum
    max_chars: usize,
}

/// Complete configuration.
///
/// # Examples
///
/// ```no_run
/// use oblique_generator::ObliqueConfig;
///
/// let config = ObliqueConfig::load()?;
/// println!("archive: {}", config.archive().path().display());
/// # Ok::<(), oblique_error::ObliqueError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct ObliqueConfig {
    /// Archive and today file locations
    archive: ArchiveSettings,
    /// Generation parameters
    generation: GenerationSettings,
    /// Retry policy
    retry: RetrySettings,
    /// Acceptance bounds
    validation: ValidationSettings,
}

impl ObliqueConfig {
    /// Load from bundled defaults, user files and the environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a source fails to parse or a value is out of range.
    #[instrument(name = "oblique_config_load")]
    pub fn load() -> ObliqueResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(config_dir) = dirs::home_dir() {
            let home_config = config_dir.join(".config/oblique/oblique.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("oblique").required(false))
            .add_source(env_source());

        Self::finish(builder)
    }

    /// Load bundled defaults overlaid with one explicit file and the environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file is missing, fails to parse, or
    /// holds an out-of-range value.
    #[instrument(name = "oblique_config_from_file", skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> ObliqueResult<Self> {
        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()))
            .add_source(env_source());

        Self::finish(builder)
    }

    /// Parse bundled defaults overlaid with TOML text. The environment is not consulted.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the text fails to parse or holds an out-of-range value.
    pub fn from_toml_str(toml: &str) -> ObliqueResult<Self> {
        let config: Self = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    fn finish(builder: config::ConfigBuilder<config::builder::DefaultState>) -> ObliqueResult<Self> {
        let mut config: Self = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;

        config.override_model(std::env::var("GEMINI_MODEL").ok());
        config.validate()?;
        debug!(
            archive = %config.archive.path.display(),
            model = %config.generation.model,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Replace the model when `model` is a non-blank name.
    pub fn override_model(&mut self, model: Option<String>) {
        if let Some(model) = model.filter(|m| !m.trim().is_empty()) {
            self.generation.model = model;
        }
    }

    /// Redirect the archive and today files.
    pub fn set_paths(&mut self, archive: impl Into<PathBuf>, today: impl Into<PathBuf>) {
        self.archive.path = archive.into();
        self.archive.today_path = today.into();
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first offending key.
    pub fn validate(&self) -> ObliqueResult<()> {
        if self.retry.max_attempts == 0 {
            return Err(ConfigError::new("retry.max_attempts must be at least 1").into());
        }
        if self.generation.sample_size == 0 {
            return Err(ConfigError::new("generation.sample_size must be at least 1").into());
        }
        if self.generation.sample_size > self.archive.min_size {
            return Err(ConfigError::new(format!(
                "generation.sample_size ({}) must not exceed archive.min_size ({})",
                self.generation.sample_size, self.archive.min_size
            )).into());
        }
        if self.validation.min_chars > self.validation.max_chars {
            return Err(ConfigError::new(format!(
                "validation.min_chars ({}) must not exceed validation.max_chars ({})",
                self.validation.min_chars, self.validation.max_chars
            )).into());
        }
        if self.generation.model.trim().is_empty() {
            return Err(ConfigError::new("generation.model must not be empty").into());
        }
        Ok(())
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("OBLIQUE")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
