//! Zip container with an XML card document.

use crate::{ExtractResult, Extractor, RawExtraction};
use oblique_error::{ExtractError, ExtractErrorKind};
use regex::{Captures, Regex};
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use std::sync::LazyLock;

/// Inner document every card export must contain.
pub const CARDS_DOCUMENT: &str = "cards.xml";

static FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<p_1>(.*?)</p_1>").expect("Valid field regex"));

static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(quot|apos|amp|lt|gt|#10|#13);").expect("Valid entity regex")
});

static NEWLINE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n+").expect("Valid newline regex"));

static SPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\t ]+").expect("Valid space regex"));

static LIST_GLYPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-–—・●◆■]\s*").expect("Valid list glyph regex"));

/// Reads `<p_1>` fields from the `cards.xml` inside a zip export.
#[derive(Debug, Clone)]
pub struct CardsExtractor {
    path: PathBuf,
}

impl CardsExtractor {
    /// Create an extractor for the container at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_document(&self) -> ExtractResult<String> {
        let file = File::open(&self.path).map_err(|e| {
            ExtractError::new(ExtractErrorKind::Read(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
        })?;

        let mut container = zip::ZipArchive::new(file).map_err(|e| {
            ExtractError::new(ExtractErrorKind::InvalidContainer(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
        })?;

        let mut entry = container.by_name(CARDS_DOCUMENT).map_err(|e| match e {
            zip::result::ZipError::FileNotFound => ExtractError::new(
                ExtractErrorKind::MissingContainerEntry(CARDS_DOCUMENT.to_string()),
            ),
            other => ExtractError::new(ExtractErrorKind::InvalidContainer(format!(
                "{}: {}",
                self.path.display(),
                other
            ))),
        })?;

        let mut xml = String::new();
        entry.read_to_string(&mut xml).map_err(|e| {
            ExtractError::new(ExtractErrorKind::Read(format!("{}: {}", CARDS_DOCUMENT, e)))
        })?;
        Ok(xml)
    }
}

impl Extractor for CardsExtractor {
    fn name(&self) -> &'static str {
        "cards"
    }

    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    fn extract(&self) -> ExtractResult<RawExtraction> {
        let xml = self.read_document()?;
        tracing::debug!(bytes = xml.len(), "Read card document");
        Ok(parse_cards_xml(&xml))
    }
}

/// Pull every `<p_1>` field out of the card document, in order.
///
/// # Examples
///
/// ```
/// use oblique_extract::parse_cards_xml;
///
/// let xml = "<card><p_1>・ なぜ&amp;どこで？</p_1></card><card><p_1>  </p_1></card>";
/// let extraction = parse_cards_xml(xml);
/// assert_eq!(extraction.raw, 1);
/// assert_eq!(extraction.cleaned, vec!["なぜ&どこで？".to_string()]);
/// ```
pub fn parse_cards_xml(xml: &str) -> RawExtraction {
    let raw: Vec<String> = FIELD
        .captures_iter(xml)
        .map(|caps| normalize_field(&caps[1]))
        .filter(|s| !s.is_empty())
        .collect();

    let cleaned = raw
        .iter()
        .map(|s| LIST_GLYPH.replace(s, "").trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    RawExtraction {
        raw: raw.len(),
        cleaned,
    }
}

fn normalize_field(field: &str) -> String {
    let decoded = decode_entities(field).replace('\r', "");
    let single_lines = NEWLINE_RUN.replace_all(&decoded, "\n");
    SPACE_RUN.replace_all(&single_lines, " ").trim().to_string()
}

/// Decode the XML entities card exports use.
///
/// Decoding is a single pass: a double-escaped `&amp;lt;` yields the literal
/// text `&lt;`, not `<`. Exports that escaped their markup twice therefore
/// keep one level of escaping in the archive.
fn decode_entities(text: &str) -> String {
    ENTITY
        .replace_all(text, |caps: &Captures| match &caps[1] {
            "quot" => "\"",
            "apos" => "'",
            "amp" => "&",
            "lt" => "<",
            "gt" => ">",
            "#10" => "\n",
            _ => "\r",
        })
        .into_owned()
}
