//! Errors raised while reading an external export.

/// Input format failures. None of these are retried.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ExtractErrorKind {
    /// Export could not be read from disk
    #[display("Failed to read export: {}", _0)]
    Read(String),
    /// Export is not a readable zip container
    #[display("Invalid container: {}", _0)]
    InvalidContainer(String),
    /// Required inner document is absent from the container
    #[display("'{}' not found inside container", _0)]
    MissingContainerEntry(String),
    /// Delimited export has no data rows
    #[display("Export has no data rows: {}", _0)]
    EmptyInput(String),
    /// SQLite export could not be opened or queried
    #[display("Database export error: {}", _0)]
    Database(String),
}

/// Extraction error with location tracking.
///
/// # Examples
///
/// ```
/// use oblique_error::{ExtractError, ExtractErrorKind};
///
/// let err = ExtractError::new(ExtractErrorKind::MissingContainerEntry("cards.xml".into()));
/// assert!(format!("{}", err).contains("cards.xml"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Extract Error: {} at line {} in {}", kind, line, file)]
pub struct ExtractError {
    /// The kind of error that occurred
    pub kind: ExtractErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ExtractError {
    /// Create a new extraction error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ExtractErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
