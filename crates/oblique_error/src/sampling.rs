//! Sampler error types.

/// Sampler failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum SamplingErrorKind {
    /// More samples requested than the archive holds
    #[display("Cannot draw {} samples from an archive of {}", requested, available)]
    InsufficientSize {
        /// Number of samples requested
        requested: usize,
        /// Archive size
        available: usize,
    },
}

/// Sampling error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Sampling Error: {} at line {} in {}", kind, line, file)]
pub struct SamplingError {
    /// The kind of error that occurred
    pub kind: SamplingErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl SamplingError {
    /// Create a new sampling error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SamplingErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
