// src/llm/gemini/extraction.rs
// Response extraction helpers for Gemini API responses

use crate::llm::backend::BackendError;
use crate::llm::gemini::types::GeminiResponse;
use crate::llm::logging::Usage;

/// Extract the generated text from the first candidate (non-thought parts only).
///
/// A response without any text - safety block, empty candidate list - is an
/// [`BackendError::EmptyResponse`] carrying whatever reason Gemini gave.
pub fn extract_text(response: &GeminiResponse) -> Result<String, BackendError> {
    let candidate = response.candidates.first();

    let text: Vec<&str> = candidate
        .and_then(|c| c.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .filter(|p| !p.thought)
                .filter_map(|p| p.text.as_deref())
                .collect()
        })
        .unwrap_or_default();

    if !text.is_empty() {
        return Ok(text.join(""));
    }

    let reason = candidate
        .and_then(|c| c.finish_reason.clone())
        .or_else(|| {
            response
                .prompt_feedback
                .as_ref()
                .and_then(|f| f.block_reason.clone())
        });
    Err(BackendError::EmptyResponse(reason))
}

/// Convert Gemini usage metadata into shared usage counts
pub fn extract_usage(response: &GeminiResponse) -> Option<Usage> {
    response.usage_metadata.as_ref().map(|u| Usage {
        prompt_tokens: u.prompt_token_count,
        completion_tokens: u.candidates_token_count.unwrap_or(0),
        total_tokens: u.total_token_count,
    })
}
