// src/llm/http_client.rs
// Shared HTTP execution and status classification for LLM providers

use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

use super::backend::BackendError;

/// Default request timeout for generation calls
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);
/// Default connect timeout
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
/// Idle keep-alive connections held per host
const POOL_IDLE_PER_HOST: usize = 10;
/// Error bodies longer than this are cut before logging
const MAX_ERROR_BODY_CHARS: usize = 500;

/// HTTP client wrapper that executes one provider request and classifies the outcome.
///
/// Retrying is the caller's decision; this type only reports whether a failure
/// was a rate limit, another HTTP status, or a transport problem.
pub struct LlmHttpClient {
    client: Client,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

impl LlmHttpClient {
    /// Build the pooled client once per backend. If the TLS backend cannot be
    /// initialised with these options, reqwest's default client is used instead.
    pub fn new(request_timeout: Duration, connect_timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(request_timeout)
            .connect_timeout(connect_timeout)
            .pool_max_idle_per_host(POOL_IDLE_PER_HOST)
            .build()
            .unwrap_or_else(|e| {
                warn!(error = %e, "Falling back to default HTTP client");
                Client::new()
            });

        Self {
            client,
            request_timeout,
            connect_timeout,
        }
    }

    /// Execute a single HTTP request built by `build_request`.
    /// Returns the response body as text on success.
    pub async fn execute_request<F>(
        &self,
        request_id: &str,
        body: String,
        build_request: F,
    ) -> Result<String, BackendError>
    where
        F: FnOnce(&Client, String) -> reqwest::RequestBuilder,
    {
        let response = build_request(&self.client, body).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.text().await?);
        }

        let error_body = response.text().await.unwrap_or_default();
        let message = extract_error_message(&error_body);

        if status == StatusCode::TOO_MANY_REQUESTS {
            debug!(request_id = %request_id, error = %message, "Provider signalled rate limit");
            return Err(BackendError::RateLimited(message));
        }

        warn!(
            request_id = %request_id,
            status = %status,
            error = %message,
            "Provider returned error status"
        );
        Err(BackendError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

/// Pull `error.message` out of a Google-style error body, falling back to the raw text
pub(crate) fn extract_error_message(body: &str) -> String {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
    if let Some(msg) = parsed
        .as_ref()
        .and_then(|v| v.get("error"))
        .and_then(|e| e.get("message"))
        .and_then(|m| m.as_str())
    {
        return msg.to_string();
    }

    let trimmed = body.trim();
    if trimmed.chars().count() > MAX_ERROR_BODY_CHARS {
        let cut: String = trimmed.chars().take(MAX_ERROR_BODY_CHARS).collect();
        format!("{}...", cut)
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Construction
    // ========================================================================

    #[test]
    fn test_client_creation() {
        let client = LlmHttpClient::new(Duration::from_secs(10), Duration::from_secs(5));
        assert_eq!(client.request_timeout, Duration::from_secs(10));
        assert_eq!(client.connect_timeout, Duration::from_secs(5));
    }

    // ========================================================================
    // Error body parsing
    // ========================================================================

    #[test]
    fn test_extract_google_error_message() {
        let body = r#"{"error":{"code":429,"message":"Resource has been exhausted","status":"RESOURCE_EXHAUSTED"}}"#;
        assert_eq!(extract_error_message(body), "Resource has been exhausted");
    }

    #[test]
    fn test_extract_plain_body() {
        assert_eq!(extract_error_message("  upstream down \n"), "upstream down");
    }

    #[test]
    fn test_extract_truncates_long_body() {
        let body = "x".repeat(MAX_ERROR_BODY_CHARS + 50);
        let msg = extract_error_message(&body);
        assert!(msg.ends_with("..."));
        assert_eq!(msg.chars().count(), MAX_ERROR_BODY_CHARS + 3);
    }

    // ========================================================================
    // Transport failures (requires tokio + actual socket)
    // ========================================================================

    #[tokio::test]
    async fn test_execute_request_connection_refused() {
        let client = LlmHttpClient::new(Duration::from_millis(500), Duration::from_millis(200));
        let result = client
            .execute_request("test", "{}".into(), |c, body| {
                c.post("http://127.0.0.1:1")
                    .header("Content-Type", "application/json")
                    .body(body)
            })
            .await;
        assert!(matches!(result, Err(BackendError::Transport(_))));
    }
}
