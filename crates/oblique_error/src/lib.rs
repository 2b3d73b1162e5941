//! Error types for the Oblique pipeline.
//!
//! Every crate in the workspace reports failures through the types defined here.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use oblique_error::{ObliqueResult, StorageError, StorageErrorKind};
//!
//! fn load() -> ObliqueResult<Vec<String>> {
//!     Err(StorageError::new(StorageErrorKind::NotFound("docs/questions.json".into())))?
//! }
//!
//! match load() {
//!     Ok(questions) => println!("Loaded {}", questions.len()),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod extract;
mod gemini;
mod sampling;
mod storage;
mod validation;

pub use config::ConfigError;
pub use error::{ObliqueError, ObliqueErrorKind, ObliqueResult};
pub use extract::{ExtractError, ExtractErrorKind};
pub use gemini::{GeminiError, GeminiErrorKind, RetryableError};
pub use sampling::{SamplingError, SamplingErrorKind};
pub use storage::{StorageError, StorageErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};
