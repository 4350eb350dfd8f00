// src/web/error.rs
// Mapping from proxy errors to caller-visible HTTP responses

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

use crate::error::ResolveError;

pub const CHAT_NOT_CONFIGURED: &str = "Gemini API key not configured. Please add GEMINI_API_KEY to .env.local";
pub const CHAT_BUSY: &str = "AI is currently busy. Please wait a moment and try again.";
pub const CHAT_FAILED: &str = "Failed to generate response. Please try again.";
pub const DOCUMENT_NOT_CONFIGURED: &str = "Gemini API key not configured";
pub const DOCUMENT_INVALID_TYPE: &str = "Invalid document type";
pub const DOCUMENT_FAILED: &str = "Failed to generate document. Please try again.";
pub const INVALID_BODY: &str = "Invalid request body";

/// Which endpoint produced the error; the two endpoints word their messages differently
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Chat,
    Document,
}

/// JSON error response: `{ "error": message }`
#[derive(Debug)]
pub struct ApiError {
    pub status_code: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Generic, caller-safe error for a proxy failure. Backend detail never leaks.
    pub fn from_resolve(endpoint: Endpoint, err: &ResolveError) -> Self {
        match (endpoint, err) {
            (Endpoint::Chat, ResolveError::Config(_)) => Self::internal(CHAT_NOT_CONFIGURED),
            (Endpoint::Chat, ResolveError::RateLimited { .. }) => {
                Self::new(StatusCode::TOO_MANY_REQUESTS, CHAT_BUSY)
            }
            (Endpoint::Chat, ResolveError::InvalidRequest(_)) => Self::bad_request(INVALID_BODY),
            (Endpoint::Chat, ResolveError::Generation(_)) => Self::internal(CHAT_FAILED),

            (Endpoint::Document, ResolveError::Config(_)) => Self::internal(DOCUMENT_NOT_CONFIGURED),
            (Endpoint::Document, ResolveError::InvalidRequest(_)) => {
                Self::bad_request(DOCUMENT_INVALID_TYPE)
            }
            (Endpoint::Document, ResolveError::RateLimited { .. } | ResolveError::Generation(_)) => {
                Self::internal(DOCUMENT_FAILED)
            }
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.status_code)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code, Json(json!({ "error": self.message }))).into_response()
    }
}
