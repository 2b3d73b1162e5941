//! Extractors that rebuild the question archive from an external export.
//!
//! Each extractor reads one export format and yields its cleaned questions
//! in order of appearance. [`run_extractor`] then deduplicates them (first
//! occurrence wins), overwrites the archive file, and reports three counts:
//! raw extracted, after cleaning, and unique.
//!
//! # Available Formats
//!
//! - [`CardsExtractor`]: zip container holding `cards.xml` with `<p_1>` fields
//! - [`TsvExtractor`]: tab-separated rows, question in the second column
//! - [`SqliteExtractor`]: card database export (enable with the `sqlite` feature)
//!
//! # Example
//!
//! ```no_run
//! use oblique_extract::{run_extractor, TsvExtractor};
//! use oblique_storage::ArchiveStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = ArchiveStore::new("docs/questions.json");
//! let report = run_extractor(&TsvExtractor::new("export.tsv"), &store)?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cards;
#[cfg(feature = "sqlite")]
mod sqlite;
mod tsv;

pub use cards::{parse_cards_xml, CardsExtractor, CARDS_DOCUMENT};
#[cfg(feature = "sqlite")]
pub use sqlite::{clean_cells, SqliteExtractor};
pub use tsv::{parse_tsv, TsvExtractor};

use oblique_core::Archive;
use oblique_error::{ExtractError, ObliqueResult};
use oblique_storage::ArchiveStore;

/// Result type for extraction.
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Questions read from an export, before deduplication.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawExtraction {
    /// How many candidate values the export yielded before cleaning
    pub raw: usize,
    /// Cleaned, non-empty questions in order of appearance
    pub cleaned: Vec<String>,
}

/// Counts reported after an extraction run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("{}: extracted {}, after clean {}, unique {}", source, raw, cleaned, unique)]
pub struct ExtractReport {
    /// Extractor name
    pub source: &'static str,
    /// Values found in the export
    pub raw: usize,
    /// Values left after cleaning
    pub cleaned: usize,
    /// Questions written to the archive
    pub unique: usize,
}

/// A one-shot reader for an export format.
pub trait Extractor {
    /// Short name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Read the export and return its cleaned questions.
    fn extract(&self) -> ExtractResult<RawExtraction>;
}

/// Extract, deduplicate and overwrite the archive.
///
/// The archive is replaced wholesale, never appended to. No minimum size is
/// enforced here; the generator rejects archives that are too small.
#[tracing::instrument(skip_all, fields(source = extractor.name(), archive = %store.path().display()))]
pub fn run_extractor(extractor: &dyn Extractor, store: &ArchiveStore) -> ObliqueResult<ExtractReport> {
    let RawExtraction { raw, cleaned } = extractor.extract()?;
    let cleaned_count = cleaned.len();

    let archive = Archive::from_questions(cleaned);
    store.save(&archive)?;

    let report = ExtractReport {
        source: extractor.name(),
        raw,
        cleaned: cleaned_count,
        unique: archive.len(),
    };

    tracing::info!(
        raw = report.raw,
        cleaned = report.cleaned,
        unique = report.unique,
        "Extraction complete"
    );
    Ok(report)
}
