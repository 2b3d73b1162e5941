//! Test utilities for generator tests.
//!
//! This module provides a mock generation backend and archive fixtures.

use oblique_core::{Archive, Question};
use oblique_generator::GeneratorSettings;
use oblique_models::RetryConfig;
use oblique_storage::{ArchiveStore, TodayStore};
use std::path::Path;
use std::time::Duration;

pub mod mock_gemini;

#[allow(unused_imports)]
pub use mock_gemini::{MockBehavior, MockGeminiClient, MockResponse};

/// Archive of `count` distinct, valid-looking questions.
pub fn archive_of(count: usize) -> Archive {
    Archive::from_questions((0..count).map(|i| Question::new(format!("参照用の問い その{}？", i))))
}

/// Stores rooted in `dir`, with the archive already written.
pub fn stores_with(dir: &Path, archive: &Archive) -> (ArchiveStore, TodayStore) {
    let archive_store = ArchiveStore::new(dir.join("docs/questions.json"));
    let today_store = TodayStore::new(dir.join("docs/today.json"));
    archive_store
        .save(archive)
        .expect("Failed to write archive fixture");
    (archive_store, today_store)
}

/// Default settings with a 1ms backoff step.
pub fn fast_settings() -> GeneratorSettings {
    GeneratorSettings {
        retry: RetryConfig::new(3, Duration::from_millis(1)),
        ..GeneratorSettings::default()
    }
}
