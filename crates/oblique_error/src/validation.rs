//! Errors for generated candidates that cannot be accepted.

/// Reasons a generated question is refused.
///
/// These consume a quota unit but are never retried.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ValidationErrorKind {
    /// Candidate failed one of the acceptance rules
    #[display("Generated question failed validation ({}): {}", reason, text)]
    Rejected {
        /// Sanitized candidate text
        text: String,
        /// Rule that rejected it
        reason: String,
    },
    /// Candidate is already in the archive
    #[display("Generated question is duplicate: {}", _0)]
    Duplicate(String),
}

/// Validation error with location tracking.
///
/// # Examples
///
/// ```
/// use oblique_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::Duplicate("なぜ？".into()));
/// assert!(format!("{}", err).contains("duplicate"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The kind of error that occurred
    pub kind: ValidationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new validation error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
