// src/llm/gemini/conversion.rs
// Conversion from proxy requests to Gemini wire format

use crate::llm::backend::GenerationRequest;
use crate::llm::gemini::types::{GeminiContent, GeminiPart, GeminiRequest};
use crate::llm::types::ConversationTurn;

/// Convert a conversation turn to Gemini content, renaming assistant to model
pub fn convert_turn(turn: &ConversationTurn) -> GeminiContent {
    GeminiContent {
        role: Some(turn.role.backend_role().to_string()),
        parts: vec![GeminiPart {
            text: turn.text.clone(),
        }],
    }
}

/// System instruction content (no role)
pub fn system_instruction(text: &str) -> GeminiContent {
    GeminiContent {
        role: None,
        parts: vec![GeminiPart {
            text: text.to_string(),
        }],
    }
}

/// Build the full generateContent request body
pub fn build_request(request: &GenerationRequest) -> GeminiRequest {
    let system = if request.system_instruction.is_empty() {
        None
    } else {
        Some(system_instruction(&request.system_instruction))
    };

    GeminiRequest {
        contents: request.turns.iter().map(convert_turn).collect(),
        system_instruction: system,
    }
}
