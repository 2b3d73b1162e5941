//! Text generation for Oblique.
//!
//! This crate defines the [`GenerationDriver`] seam the generator talks to,
//! a REST client for the Gemini `generateContent` endpoint, and the retry
//! policy applied around a driver call.
//!
//! # Example
//!
//! ```no_run
//! use oblique_models::{generate_with_retry, GeminiClient, GenerateRequest, RetryConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::from_env()?;
//! let request = GenerateRequest::new("問いをひとつだけ書いてください。");
//! let response = generate_with_retry(&client, &request, &RetryConfig::default()).await?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod driver;
mod gemini;
mod request;
mod retry;

pub use driver::GenerationDriver;
pub use gemini::{api_key_from_env, GeminiClient, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT};
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use retry::{generate_with_retry, RetryConfig};

/// Result type for generation calls.
pub type GeminiResult<T> = Result<T, oblique_error::GeminiError>;
