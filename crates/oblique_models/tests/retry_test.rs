use async_trait::async_trait;
use oblique_error::{GeminiError, GeminiErrorKind};
use oblique_models::{
    generate_with_retry, GeminiResult, GenerateRequest, GenerateResponse, GenerationDriver,
    RetryConfig,
};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// Replays a fixed script of status codes; 200 means success.
struct ScriptedDriver {
    script: Mutex<VecDeque<u16>>,
    calls: AtomicUsize,
}

impl ScriptedDriver {
    fn new(script: &[u16]) -> Self {
        Self {
            script: Mutex::new(script.iter().copied().collect()),
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerationDriver for ScriptedDriver {
    async fn generate(&self, _req: &GenerateRequest) -> GeminiResult<GenerateResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let status = self.script.lock().unwrap().pop_front().unwrap_or(200);
        if status == 200 {
            Ok(GenerateResponse::new("何を後回しにしている？"))
        } else {
            Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status,
                message: format!("status {}", status),
            }))
        }
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-model"
    }
}

fn fast() -> RetryConfig {
    RetryConfig::new(3, Duration::from_millis(1))
}

fn status_of(err: &GeminiError) -> Option<u16> {
    err.kind.status_code()
}

#[tokio::test]
async fn test_success_on_first_attempt() -> anyhow::Result<()> {
    let driver = ScriptedDriver::new(&[]);
    let response = generate_with_retry(&driver, &GenerateRequest::new("p"), &fast()).await?;
    assert_eq!(response.text(), "何を後回しにしている？");
    assert_eq!(driver.calls(), 1);
    Ok(())
}

#[tokio::test]
async fn test_server_error_then_success() -> anyhow::Result<()> {
    let driver = ScriptedDriver::new(&[503, 500]);
    let response = generate_with_retry(&driver, &GenerateRequest::new("p"), &fast()).await?;
    assert_eq!(response.text(), "何を後回しにしている？");
    assert_eq!(driver.calls(), 3);
    Ok(())
}

#[tokio::test]
async fn test_persistent_rate_limit_exhausts_attempts() {
    let driver = ScriptedDriver::new(&[429, 429, 429, 429]);
    let err = generate_with_retry(&driver, &GenerateRequest::new("p"), &fast())
        .await
        .unwrap_err();
    assert_eq!(status_of(&err), Some(429));
    assert!(err.is_rate_limited());
    assert_eq!(driver.calls(), 3);
}

#[tokio::test]
async fn test_permanent_error_is_not_retried() {
    for status in [400, 401, 403, 404] {
        let driver = ScriptedDriver::new(&[status]);
        let err = generate_with_retry(&driver, &GenerateRequest::new("p"), &fast())
            .await
            .unwrap_err();
        assert_eq!(status_of(&err), Some(status));
        assert_eq!(driver.calls(), 1, "status {}", status);
    }
}

#[tokio::test]
async fn test_transient_then_permanent_stops() {
    let driver = ScriptedDriver::new(&[503, 404, 429]);
    let err = generate_with_retry(&driver, &GenerateRequest::new("p"), &fast())
        .await
        .unwrap_err();
    assert_eq!(status_of(&err), Some(404));
    assert_eq!(driver.calls(), 2);
}

#[tokio::test]
async fn test_single_attempt_policy() {
    let driver = ScriptedDriver::new(&[503]);
    let err = generate_with_retry(&driver, &GenerateRequest::new("p"), &RetryConfig::no_retry())
        .await
        .unwrap_err();
    assert_eq!(status_of(&err), Some(503));
    assert_eq!(driver.calls(), 1);
}

#[tokio::test]
async fn test_linear_backoff_waits() {
    let driver = ScriptedDriver::new(&[429, 429, 429]);
    let config = RetryConfig::new(3, Duration::from_millis(40));

    let started = Instant::now();
    let _ = generate_with_retry(&driver, &GenerateRequest::new("p"), &config).await;
    let elapsed = started.elapsed();

    // 40ms before the second attempt, 80ms before the third, none after.
    assert!(elapsed >= Duration::from_millis(120), "elapsed {:?}", elapsed);
    assert!(elapsed < Duration::from_millis(1000), "elapsed {:?}", elapsed);
}

#[test]
fn test_delay_schedule() {
    let delays: Vec<Duration> = RetryConfig::new(4, Duration::from_millis(1500))
        .delays()
        .collect();
    assert_eq!(
        delays,
        vec![
            Duration::from_millis(1500),
            Duration::from_millis(3000),
            Duration::from_millis(4500)
        ]
    );
    assert_eq!(RetryConfig::new(0, Duration::from_secs(1)).delays().count(), 0);
}
