//! Request and response types for text generation.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A single-prompt generation request.
///
/// # Examples
///
/// ```
/// use oblique_models::GenerateRequest;
///
/// let request = GenerateRequest::builder()
///     .prompt("問いをひとつ")
///     .model("gemini-2.0-flash")
///     .temperature(0.7)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.model().as_deref(), Some("gemini-2.0-flash"));
/// assert_eq!(*request.temperature(), 0.7);
/// assert_eq!(*request.max_output_tokens(), 120);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct GenerateRequest {
    /// Prompt text sent as the single user turn
    prompt: String,
    /// Model override; the driver's own model is used when absent
    #[builder(default, setter(strip_option))]
    model: Option<String>,
    /// Sampling temperature
    #[builder(default = "0.9")]
    temperature: f64,
    /// Nucleus sampling threshold
    #[builder(default = "0.95")]
    top_p: f64,
    /// Upper bound on generated tokens
    #[builder(default = "120")]
    max_output_tokens: u32,
}

impl GenerateRequest {
    /// Request with default sampling parameters.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: None,
            temperature: 0.9,
            top_p: 0.95,
            max_output_tokens: 120,
        }
    }

    /// Creates a new builder for `GenerateRequest`.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// Generated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    text: String,
}

impl GenerateResponse {
    /// Wrap generated text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The generated text, possibly empty.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Take ownership of the generated text.
    pub fn into_text(self) -> String {
        self.text
    }
}
