//! Storage error types for the archive and today files.

/// Kinds of storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// Failed to create the parent directory of a persisted file
    #[display("Failed to create storage directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to write file
    #[display("Failed to write file: {}", _0)]
    FileWrite(String),
    /// Failed to read file
    #[display("Failed to read file: {}", _0)]
    FileRead(String),
    /// Persisted file does not exist
    #[display("File not found: {}", _0)]
    NotFound(String),
    /// Persisted value is not the expected JSON shape
    #[display("Invalid format: {}", _0)]
    InvalidFormat(String),
    /// Archive holds fewer entries than the caller requires
    #[display("Archive too small: {} entries, at least {} required", found, required)]
    TooSmall {
        /// Number of entries loaded
        found: usize,
        /// Minimum number the caller asked for
        required: usize,
    },
}

/// Storage error with location tracking.
///
/// # Examples
///
/// ```
/// use oblique_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::TooSmall { found: 12, required: 50 });
/// assert!(format!("{}", err).contains("at least 50"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
