// src/llm/backend.rs
// Backend abstraction - anything that turns a conversation into generated text

use async_trait::async_trait;
use thiserror::Error;

use super::types::ConversationTurn;

/// Failure classes reported by a generative backend.
///
/// Only [`BackendError::RateLimited`] is considered transient by the proxy.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("rate limited by backend: {0}")]
    RateLimited(String),

    #[error("backend returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed backend response: {0}")]
    MalformedResponse(String),

    #[error("backend returned no text (reason: {})", .0.as_deref().unwrap_or("unknown"))]
    EmptyResponse(Option<String>),
}

impl BackendError {
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited(_))
    }

    /// HTTP status reported by the backend, when there was one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RateLimited(_) => Some(429),
            Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::MalformedResponse(_) | Self::EmptyResponse(_) => None,
        }
    }
}

/// A single generation call: system instruction plus the full turn sequence,
/// the last of which is the message to answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub system_instruction: String,
    pub turns: Vec<ConversationTurn>,
}

impl GenerationRequest {
    /// Request for a one-shot prompt with no history
    pub fn single(system_instruction: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            system_instruction: system_instruction.into(),
            turns: vec![ConversationTurn::user(prompt)],
        }
    }
}

/// Trait for generative backends. Implementations must be stateless per call.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Generate text for the request, returning it verbatim
    async fn generate(&self, request: &GenerationRequest) -> Result<String, BackendError>;

    /// Model identifier, for logs and health output
    fn model_name(&self) -> String;
}
