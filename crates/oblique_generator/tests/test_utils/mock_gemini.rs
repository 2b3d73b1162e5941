//! Mock Gemini client for testing.

use async_trait::async_trait;
use oblique_error::{GeminiError, GeminiErrorKind};
use oblique_models::{GeminiResult, GenerateRequest, GenerateResponse, GenerationDriver};
use std::sync::{Arc, Mutex};

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum MockBehavior {
    /// Always return success with the given text
    Success(String),
    /// Always return the specified error
    Error(GeminiErrorKind),
    /// Fail N times with the error, then succeed with the text
    FailThenSucceed {
        fail_count: usize,
        error: GeminiErrorKind,
        success_text: String,
    },
    /// Return a sequence of responses (errors or success)
    Sequence(Vec<MockResponse>),
}

/// A single mock response (success or error).
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum MockResponse {
    Success(String),
    Error(GeminiErrorKind),
}

/// Mock Gemini client for testing.
///
/// Records every prompt it receives so tests can inspect what was sent.
pub struct MockGeminiClient {
    behavior: MockBehavior,
    call_count: Arc<Mutex<usize>>,
    prompts: Arc<Mutex<Vec<String>>>,
    model_name: String,
}

#[allow(dead_code)]
impl MockGeminiClient {
    fn with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(Mutex::new(0)),
            prompts: Arc::new(Mutex::new(Vec::new())),
            model_name: "mock-gemini".to_string(),
        }
    }

    /// Create a mock client that always succeeds with the given text.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::with_behavior(MockBehavior::Success(text.into()))
    }

    /// Create a mock client that always fails with the given error.
    pub fn new_error(error: GeminiErrorKind) -> Self {
        Self::with_behavior(MockBehavior::Error(error))
    }

    /// Create a mock client that always answers with an HTTP status.
    pub fn new_status(status_code: u16) -> Self {
        Self::new_error(http_error(status_code))
    }

    /// Create a mock client that fails N times, then succeeds.
    pub fn new_fail_then_succeed(
        fail_count: usize,
        error: GeminiErrorKind,
        success_text: impl Into<String>,
    ) -> Self {
        Self::with_behavior(MockBehavior::FailThenSucceed {
            fail_count,
            error,
            success_text: success_text.into(),
        })
    }

    /// Create a mock client with a sequence of responses.
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self::with_behavior(MockBehavior::Sequence(responses))
    }

    /// Get the number of times generate() was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Prompts received, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    fn next_response(&self) -> GeminiResult<GenerateResponse> {
        let mut count = self.call_count.lock().unwrap();
        let current_count = *count;
        *count += 1;

        match &self.behavior {
            MockBehavior::Success(text) => Ok(GenerateResponse::new(text.clone())),
            MockBehavior::Error(error_kind) => Err(GeminiError::new(error_kind.clone())),
            MockBehavior::FailThenSucceed {
                fail_count,
                error,
                success_text,
            } => {
                if current_count < *fail_count {
                    Err(GeminiError::new(error.clone()))
                } else {
                    Ok(GenerateResponse::new(success_text.clone()))
                }
            }
            MockBehavior::Sequence(responses) => match responses.get(current_count) {
                Some(MockResponse::Success(text)) => Ok(GenerateResponse::new(text.clone())),
                Some(MockResponse::Error(error_kind)) => Err(GeminiError::new(error_kind.clone())),
                None => Err(GeminiError::new(GeminiErrorKind::Transport(format!(
                    "Mock sequence exhausted (call {} beyond {} responses)",
                    current_count + 1,
                    responses.len()
                )))),
            },
        }
    }
}

/// HTTP error kind with a canned body.
pub fn http_error(status_code: u16) -> GeminiErrorKind {
    GeminiErrorKind::HttpError {
        status_code,
        message: format!("{{\"error\": {{\"code\": {}}}}}", status_code),
    }
}

#[async_trait]
impl GenerationDriver for MockGeminiClient {
    async fn generate(&self, req: &GenerateRequest) -> GeminiResult<GenerateResponse> {
        tokio::time::sleep(tokio::time::Duration::from_millis(1)).await;
        self.prompts.lock().unwrap().push(req.prompt().clone());
        self.next_response()
    }

    fn provider_name(&self) -> &'static str {
        "mock-gemini"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
