// tests/common/mod.rs
// Shared helpers for router tests

#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;

use resolve::llm::{BackendError, GenerationRequest, GenerativeBackend};
use resolve::prompt::PromptCatalog;
use resolve::proxy::{GenerationProxy, RetryPolicy, Sleeper};
use resolve::web::{AppState, create_router};

/// Backend that replays a fixed script of outcomes and records what it was sent
#[derive(Default)]
pub struct ScriptedBackend {
    script: Mutex<VecDeque<Result<String, BackendError>>>,
    pub requests: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedBackend {
    pub fn new(script: Vec<Result<String, BackendError>>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl GenerativeBackend for ScriptedBackend {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, BackendError> {
        self.requests.lock().unwrap().push(request.clone());
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(BackendError::MalformedResponse("script exhausted".into())))
    }

    fn model_name(&self) -> String {
        "scripted".to_string()
    }
}

#[derive(Default)]
pub struct RecordingSleeper {
    pub delays: Mutex<Vec<Duration>>,
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.delays.lock().unwrap().push(duration);
    }
}

pub fn rate_limited() -> BackendError {
    BackendError::RateLimited("Resource has been exhausted".into())
}

pub fn app_with(backend: Option<Arc<ScriptedBackend>>, sleeper: Arc<RecordingSleeper>) -> Router {
    let backend = backend.map(|b| b as Arc<dyn GenerativeBackend>);
    let proxy = GenerationProxy::new(backend, PromptCatalog::load().unwrap(), RetryPolicy::default())
        .with_sleeper(sleeper);
    create_router(AppState::new(proxy))
}

pub async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}
