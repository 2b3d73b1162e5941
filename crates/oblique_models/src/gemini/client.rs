//! Gemini REST client.

use super::dto::{GenerateContentRequest, GenerateContentResponse};
use crate::{GeminiResult, GenerateRequest, GenerateResponse, GenerationDriver};
use async_trait::async_trait;
use oblique_error::{GeminiError, GeminiErrorKind};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument};

/// Default REST base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1";

/// Model used when neither the environment nor the request names one.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for the Gemini `generateContent` endpoint.
///
/// Each call is a single HTTP request. Non-2xx answers become
/// [`GeminiErrorKind::HttpError`] carrying the status and raw body.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Creates a client with the default endpoint and timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> GeminiResult<Self> {
        Self::with_options(api_key, model, DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    /// Creates a client from `GEMINI_API_KEY` and optional `GEMINI_MODEL`.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiErrorKind::MissingApiKey`] if the key is unset or empty.
    #[instrument(name = "gemini_client_from_env")]
    pub fn from_env() -> GeminiResult<Self> {
        let api_key = api_key_from_env()?;
        let model = std::env::var("GEMINI_MODEL")
            .ok()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        Self::new(api_key, model)
    }

    /// Creates a client against a specific base URL with a request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    #[instrument(skip_all, fields(timeout_secs = timeout.as_secs()))]
    pub fn with_options(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> GeminiResult<Self> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string()))
        })?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }
}

/// Read the API key from `GEMINI_API_KEY`.
///
/// # Errors
///
/// Returns [`GeminiErrorKind::MissingApiKey`] if the variable is unset or blank.
pub fn api_key_from_env() -> GeminiResult<String> {
    std::env::var("GEMINI_API_KEY")
        .ok()
        .filter(|k| !k.trim().is_empty())
        .ok_or_else(|| GeminiError::new(GeminiErrorKind::MissingApiKey))
}

/// Turn a 2xx body into a response.
pub(crate) fn parse_response_body(body: &str) -> GeminiResult<GenerateResponse> {
    let parsed: GenerateContentResponse = serde_json::from_str(body).map_err(|e| {
        GeminiError::new(GeminiErrorKind::MalformedResponse(format!("{}: {}", e, body)))
    })?;
    Ok(GenerateResponse::new(parsed.first_text()))
}

#[async_trait]
impl GenerationDriver for GeminiClient {
    #[instrument(skip(self, req), fields(model = tracing::field::Empty))]
    async fn generate(&self, req: &GenerateRequest) -> GeminiResult<GenerateResponse> {
        let model = req.model().as_deref().unwrap_or(self.model.as_str());
        tracing::Span::current().record("model", model);

        let body = GenerateContentRequest::from(req);
        let url = self.endpoint(model);
        debug!(url = %url, "Sending Gemini API request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::Transport(e.to_string())))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::Transport(e.to_string())))?;

        if !status.is_success() {
            debug!(status = status.as_u16(), "Gemini API returned an error status");
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message: text,
            }));
        }

        parse_response_body(&text)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
