// src/web/handlers.rs
// HTTP handlers for the chat and document endpoints

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use tracing::error;

use crate::proxy::{ChatRequest, DocumentRequest};
use crate::web::error::{ApiError, Endpoint, INVALID_BODY};
use crate::web::state::AppState;
use crate::web::types::{ChatBody, ChatReply, DocumentBody, DocumentReply, HealthReply};

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthReply {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        backend_configured: state.proxy.is_configured(),
        model: state.proxy.model_name(),
    })
}

pub async fn chat(
    State(state): State<AppState>,
    body: Result<Json<ChatBody>, JsonRejection>,
) -> Result<Json<ChatReply>, ApiError> {
    let Json(body) = body.map_err(|e| {
        error!(error = %e, "Rejected chat body");
        ApiError::bad_request(INVALID_BODY)
    })?;

    let result = match state
        .proxy
        .ensure_configured()
        .and_then(|()| ChatRequest::from_messages(body.messages, body.module_context))
    {
        Ok(request) => state.proxy.send_chat(&request).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(message) => Ok(Json(ChatReply { message })),
        Err(e) => {
            error!(error = %e, kind = e.kind(), "Chat request failed");
            Err(ApiError::from_resolve(Endpoint::Chat, &e))
        }
    }
}

pub async fn generate_document(
    State(state): State<AppState>,
    body: Result<Json<DocumentBody>, JsonRejection>,
) -> Result<Json<DocumentReply>, ApiError> {
    let Json(body) = body.map_err(|e| {
        error!(error = %e, "Rejected document body");
        ApiError::bad_request(INVALID_BODY)
    })?;

    let request = DocumentRequest::from(body);
    match state.proxy.generate_document(&request).await {
        Ok(document) => Ok(Json(DocumentReply { document })),
        Err(e) => {
            error!(error = %e, kind = e.kind(), document_type = %request.kind, "Document generation failed");
            Err(ApiError::from_resolve(Endpoint::Document, &e))
        }
    }
}
