//! Daily question generation.
//!
//! One [`Orchestrator::run`] loads the archive, samples reference questions,
//! asks the generation backend for a new one, validates it, and publishes it
//! as today's question. A persistent rate limit falls back to republishing an
//! archived question so the display never goes stale.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod orchestrator;
mod outcome;
mod prompt;

pub use config::{
    ArchiveSettings, GenerationSettings, ObliqueConfig, RetrySettings, ValidationSettings,
};
pub use orchestrator::{GeneratorSettings, Orchestrator};
pub use outcome::RunOutcome;
pub use prompt::build_prompt;
