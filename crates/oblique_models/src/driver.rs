//! The generation backend seam.

use crate::{GeminiResult, GenerateRequest, GenerateResponse};
use async_trait::async_trait;

/// A backend that turns a prompt into text.
///
/// Implementations perform exactly one call per [`generate`](Self::generate);
/// retrying is layered on top by [`generate_with_retry`](crate::generate_with_retry).
#[async_trait]
pub trait GenerationDriver: Send + Sync {
    /// Generate text for the request.
    async fn generate(&self, req: &GenerateRequest) -> GeminiResult<GenerateResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier used when the request does not name one.
    fn model_name(&self) -> &str;
}
