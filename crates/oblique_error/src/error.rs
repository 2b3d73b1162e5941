//! Top-level error wrapper types.

use crate::{
    ConfigError, ExtractError, GeminiError, SamplingError, StorageError, ValidationError,
};

/// Every failure a pipeline run can surface to the operator.
///
/// # Examples
///
/// ```
/// use oblique_error::{ObliqueError, ConfigError};
///
/// let err: ObliqueError = ConfigError::new("missing model").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ObliqueErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Archive or today file error
    #[from(StorageError)]
    Storage(StorageError),
    /// Malformed or missing export
    #[from(ExtractError)]
    Extract(ExtractError),
    /// Sampler precondition violated
    #[from(SamplingError)]
    Sampling(SamplingError),
    /// Generation service error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Generated candidate refused
    #[from(ValidationError)]
    Validation(ValidationError),
}

/// Oblique error with kind discrimination.
///
/// # Examples
///
/// ```
/// use oblique_error::{ObliqueErrorKind, ObliqueResult, ExtractError, ExtractErrorKind};
///
/// fn might_fail() -> ObliqueResult<()> {
///     Err(ExtractError::new(ExtractErrorKind::EmptyInput("export.tsv".into())))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), ObliqueErrorKind::Extract(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Oblique Error: {}", _0)]
pub struct ObliqueError(Box<ObliqueErrorKind>);

impl ObliqueError {
    /// Create a new error from a kind.
    pub fn new(kind: ObliqueErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ObliqueErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to ObliqueErrorKind
impl<T> From<T> for ObliqueError
where
    T: Into<ObliqueErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Oblique operations.
pub type ObliqueResult<T> = std::result::Result<T, ObliqueError>;
