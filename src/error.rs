// src/error.rs
// Standardized error types for the generation proxy

use crate::llm::BackendError;
use thiserror::Error;

/// Main error type for the resolve library
#[derive(Error, Debug)]
pub enum ResolveError {
    /// A required setting (usually the Gemini credential) is absent
    #[error("configuration error: {0}")]
    Config(String),

    /// The backend kept answering 429 until the retry budget ran out
    #[error("max retries exceeded after {attempts} attempts: {source}")]
    RateLimited {
        attempts: u32,
        #[source]
        source: BackendError,
    },

    /// The caller sent something we refuse before touching the backend
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Any other backend failure
    #[error("generation failed: {0}")]
    Generation(#[from] BackendError),
}

/// Convenience type alias for Result using ResolveError
pub type Result<T> = std::result::Result<T, ResolveError>;

impl ResolveError {
    /// Short machine-readable tag used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "configuration",
            Self::RateLimited { .. } => "rate_limited",
            Self::InvalidRequest(_) => "invalid_request",
            Self::Generation(_) => "generation_failure",
        }
    }
}
