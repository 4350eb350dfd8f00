// src/web/mod.rs
// HTTP surface for the generation proxy

pub mod error;
pub mod handlers;
pub mod state;
pub mod types;

use anyhow::Result;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Settings;
use crate::llm::{GeminiClient, GenerativeBackend};
use crate::prompt::PromptCatalog;
use crate::proxy::GenerationProxy;

pub use state::AppState;

/// Request bodies larger than this are rejected before deserialization
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Create the web server router
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/chat", post(handlers::chat))
        .route("/api/generate-document", post(handlers::generate_document))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Wire the proxy from resolved settings. A missing key is not fatal:
/// the server starts and every generation request reports a configuration error.
pub fn build_state(settings: &Settings, catalog: PromptCatalog) -> AppState {
    let backend: Option<Arc<dyn GenerativeBackend>> = match settings.gemini_api_key.as_deref() {
        Some(key) => {
            info!(model = %settings.gemini.model, "Gemini backend configured");
            Some(Arc::new(GeminiClient::new(key.to_string(), &settings.gemini)))
        }
        None => {
            warn!("GEMINI_API_KEY not set, generation endpoints will return configuration errors");
            None
        }
    };

    AppState::new(GenerationProxy::new(backend, catalog, settings.retry))
}

/// Run the HTTP server until the process is stopped
pub async fn run(settings: Settings, catalog: PromptCatalog) -> Result<()> {
    let state = build_state(&settings, catalog);
    let app = create_router(state);

    let addr = settings.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %addr, "Resolve proxy listening");

    axum::serve(listener, app).await?;
    Ok(())
}
