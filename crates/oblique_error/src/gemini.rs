//! Generation service error types and retry classification.

/// Generation service error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GeminiErrorKind {
    /// API key not found in environment
    #[display("GEMINI_API_KEY environment variable not set")]
    MissingApiKey,
    /// Failed to create the HTTP client
    #[display("Failed to create Gemini client: {}", _0)]
    ClientCreation(String),
    /// Request never produced an HTTP response (connect failure, timeout)
    #[display("Gemini request failed: {}", _0)]
    Transport(String),
    /// Non-2xx response with status code and raw body
    #[display("Gemini API error: {}\n{}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Raw response body
        message: String,
    },
    /// Request parameters could not be assembled
    #[display("Invalid generation request: {}", _0)]
    InvalidRequest(String),
    /// 2xx response whose body is not the expected JSON
    #[display("Malformed Gemini response: {}", _0)]
    MalformedResponse(String),
}

impl GeminiErrorKind {
    /// Check if this error type should be retried.
    ///
    /// Only rate limiting (429) and server-side failures (5xx) are transient.
    pub fn is_retryable(&self) -> bool {
        match self {
            GeminiErrorKind::HttpError { status_code, .. } => {
                *status_code == 429 || (500..=599).contains(status_code)
            }
            _ => false,
        }
    }

    /// HTTP status code, when the service answered.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            GeminiErrorKind::HttpError { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}

/// Gemini error with source location tracking.
///
/// # Examples
///
/// ```
/// use oblique_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gemini Error: {} at line {} in {}", kind, line, file)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// True for a rate-limit / quota response (HTTP 429).
    pub fn is_rate_limited(&self) -> bool {
        self.kind.status_code() == Some(429)
    }
}

/// Trait for errors that support retry logic.
///
/// # Examples
///
/// ```
/// use oblique_error::{GeminiError, GeminiErrorKind, RetryableError};
///
/// let err = GeminiError::new(GeminiErrorKind::HttpError {
///     status_code: 503,
///     message: "Service unavailable".to_string(),
/// });
/// assert!(err.is_retryable());
/// assert_eq!(err.status_code(), Some(503));
///
/// let err = GeminiError::new(GeminiErrorKind::HttpError {
///     status_code: 404,
///     message: "model not found".to_string(),
/// });
/// assert!(!err.is_retryable());
/// ```
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    ///
    /// Transient errors like 503 (service unavailable) or 429 (rate limit)
    /// return true. Permanent errors like 401 (unauthorized), 404 (unknown
    /// model) or 400 (bad request) return false.
    fn is_retryable(&self) -> bool;

    /// HTTP status associated with the error, if any.
    fn status_code(&self) -> Option<u16> {
        None
    }
}

impl RetryableError for GeminiError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }

    fn status_code(&self) -> Option<u16> {
        self.kind.status_code()
    }
}
