//! Tab-separated export with a header row.

use crate::{ExtractResult, Extractor, RawExtraction};
use oblique_error::{ExtractError, ExtractErrorKind};
use std::path::PathBuf;

/// Reads the second column of a tab-separated export.
#[derive(Debug, Clone)]
pub struct TsvExtractor {
    path: PathBuf,
}

impl TsvExtractor {
    /// Create an extractor for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Extractor for TsvExtractor {
    fn name(&self) -> &'static str {
        "tsv"
    }

    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    fn extract(&self) -> ExtractResult<RawExtraction> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| {
            ExtractError::new(ExtractErrorKind::Read(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
        })?;
        parse_tsv(&text, &self.path.display().to_string())
    }
}

/// Parse TSV text, discarding the header line.
///
/// `source` names the input in the error raised when there are no data rows.
///
/// # Examples
///
/// ```
/// use oblique_extract::parse_tsv;
///
/// let text = "id\tquestion\r\n1\t  何を手放す？ \r\n2\n3\t\n";
/// let extraction = parse_tsv(text, "export.tsv").unwrap();
/// assert_eq!(extraction.raw, 3);
/// assert_eq!(extraction.cleaned, vec!["何を手放す？".to_string()]);
/// ```
pub fn parse_tsv(text: &str, source: &str) -> ExtractResult<RawExtraction> {
    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() < 2 {
        return Err(ExtractError::new(ExtractErrorKind::EmptyInput(
            source.to_string(),
        )));
    }

    let rows = &lines[1..];
    let cleaned: Vec<String> = rows
        .iter()
        .filter_map(|row| row.split('\t').nth(1))
        .map(str::trim)
        .filter(|question| !question.is_empty())
        .map(str::to_string)
        .collect();

    tracing::debug!(rows = rows.len(), kept = cleaned.len(), "Parsed TSV rows");
    Ok(RawExtraction {
        raw: rows.len(),
        cleaned,
    })
}
