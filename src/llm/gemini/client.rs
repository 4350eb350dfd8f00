// src/llm/gemini/client.rs
// Google Gemini generateContent client (non-streaming, text only)

use async_trait::async_trait;
use std::time::Instant;
use tracing::{Span, debug, info, instrument};
use uuid::Uuid;

use crate::config::GeminiSettings;
use crate::llm::backend::{BackendError, GenerationRequest, GenerativeBackend};
use crate::llm::gemini::conversion::build_request;
use crate::llm::gemini::extraction::{extract_text, extract_usage};
use crate::llm::gemini::types::GeminiResponse;
use crate::llm::http_client::LlmHttpClient;
use crate::llm::logging::{log_completion, log_usage};

/// Google Gemini API client
pub struct GeminiClient {
    api_key: String,
    model: String,
    base_url: String,
    http: LlmHttpClient,
}

impl GeminiClient {
    /// Create a client with its own HTTP connection pool
    pub fn new(api_key: String, settings: &GeminiSettings) -> Self {
        Self {
            api_key,
            model: settings.model.clone(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            http: LlmHttpClient::new(settings.request_timeout, settings.connect_timeout),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl GenerativeBackend for GeminiClient {
    fn model_name(&self) -> String {
        self.model.clone()
    }

    #[instrument(skip(self, request), fields(request_id, model = %self.model, turn_count = request.turns.len()))]
    async fn generate(&self, request: &GenerationRequest) -> Result<String, BackendError> {
        let request_id = Uuid::new_v4().to_string();
        let start_time = Instant::now();

        Span::current().record("request_id", request_id.as_str());

        info!(
            request_id = %request_id,
            turn_count = request.turns.len(),
            model = %self.model,
            "Starting Gemini generation request"
        );

        let body = serde_json::to_string(&build_request(request))
            .map_err(|e| BackendError::MalformedResponse(format!("failed to encode request: {}", e)))?;
        debug!(request_id = %request_id, bytes = body.len(), "Gemini request encoded");

        // Key travels in the x-goog-api-key header, never the query string
        let url = self.endpoint();
        let response_body = self
            .http
            .execute_request(&request_id, body, |client, body| {
                client
                    .post(&url)
                    .header("Content-Type", "application/json")
                    .header("x-goog-api-key", &self.api_key)
                    .body(body)
            })
            .await?;

        let duration_ms = start_time.elapsed().as_millis() as u64;

        let data: GeminiResponse = serde_json::from_str(&response_body)
            .map_err(|e| BackendError::MalformedResponse(format!("failed to parse Gemini response: {}", e)))?;

        if let Some(ref usage) = extract_usage(&data) {
            log_usage(&request_id, "Gemini", usage);
        }

        let text = extract_text(&data)?;
        log_completion(&request_id, "Gemini", duration_ms, text.len());

        Ok(text)
    }
}
