// src/proxy/mod.rs
// Generation proxy - chat and document drafting on top of a generative backend

mod retry;

pub use retry::{RetryError, RetryPolicy, Sleeper, TokioSleeper};

use indexmap::IndexMap;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::error::{ResolveError, Result};
use crate::llm::{ConversationTurn, GenerationRequest, GenerativeBackend};
use crate::prompt::{DocumentKind, PromptCatalog};

/// One chat call: history, the message to answer, and the optional module tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub prior_turns: Vec<ConversationTurn>,
    pub latest_user_text: String,
    pub module_context: Option<String>,
}

impl ChatRequest {
    /// Split a message list whose final entry is the new user message
    pub fn from_messages(mut messages: Vec<ConversationTurn>, module_context: Option<String>) -> Result<Self> {
        let latest = messages
            .pop()
            .ok_or_else(|| ResolveError::InvalidRequest("messages must not be empty".to_string()))?;

        Ok(Self {
            prior_turns: messages,
            latest_user_text: latest.text,
            module_context,
        })
    }
}

/// One drafting call. `kind` is the raw wire tag; it is validated by the proxy.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocumentRequest {
    pub kind: String,
    pub context: Option<String>,
    pub field_values: IndexMap<String, String>,
}

/// Stateless front door to the backend. Cheap to share behind an `Arc`.
pub struct GenerationProxy {
    backend: Option<Arc<dyn GenerativeBackend>>,
    catalog: PromptCatalog,
    retry: RetryPolicy,
    sleeper: Arc<dyn Sleeper>,
}

impl GenerationProxy {
    /// `backend` is `None` when no credential is configured; every call then
    /// fails with a configuration error.
    pub fn new(backend: Option<Arc<dyn GenerativeBackend>>, catalog: PromptCatalog, retry: RetryPolicy) -> Self {
        Self {
            backend,
            catalog,
            retry,
            sleeper: Arc::new(TokioSleeper),
        }
    }

    /// Replace the backoff sleeper (tests use a recording one)
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    pub fn is_configured(&self) -> bool {
        self.backend.is_some()
    }

    pub fn model_name(&self) -> Option<String> {
        self.backend.as_ref().map(|b| b.model_name())
    }

    pub fn catalog(&self) -> &PromptCatalog {
        &self.catalog
    }

    /// Fails with a configuration error when no credential is set. Callers run
    /// this before validating request content so a missing key always wins.
    pub fn ensure_configured(&self) -> Result<()> {
        self.backend().map(|_| ())
    }

    fn backend(&self) -> Result<&Arc<dyn GenerativeBackend>> {
        self.backend
            .as_ref()
            .ok_or_else(|| ResolveError::Config("Gemini API key not configured".to_string()))
    }

    /// Answer the latest user message in context, retrying on rate limits
    #[instrument(skip_all, fields(request_id, history = request.prior_turns.len()))]
    pub async fn send_chat(&self, request: &ChatRequest) -> Result<String> {
        let backend = self.backend()?;
        let request_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("request_id", request_id.as_str());

        let mut turns = request.prior_turns.clone();
        turns.push(ConversationTurn::user(request.latest_user_text.clone()));
        let generation = GenerationRequest {
            system_instruction: self.catalog.chat_instruction(request.module_context.as_deref()),
            turns,
        };

        info!(
            request_id = %request_id,
            module_context = request.module_context.as_deref().unwrap_or("none"),
            "Sending chat to backend"
        );

        self.retry
            .run(&request_id, self.sleeper.as_ref(), |_| backend.generate(&generation))
            .await
            .map_err(|err| match err {
                RetryError::Exhausted { attempts, last } => {
                    warn!(request_id = %request_id, attempts, "Chat retries exhausted");
                    ResolveError::RateLimited { attempts, source: last }
                }
                RetryError::Fatal(e) => {
                    warn!(request_id = %request_id, status = ?e.status(), error = %e, "Chat generation failed");
                    ResolveError::Generation(e)
                }
            })
    }

    /// Draft a document of the requested kind. One backend call, no retry.
    #[instrument(skip_all, fields(kind = %request.kind))]
    pub async fn generate_document(&self, request: &DocumentRequest) -> Result<String> {
        let backend = self.backend()?;
        let kind = DocumentKind::parse(&request.kind)
            .ok_or_else(|| ResolveError::InvalidRequest(format!("unknown document type `{}`", request.kind)))?;

        let prompt = self
            .catalog
            .document_prompt(kind, &request.field_values, request.context.as_deref());
        let generation = GenerationRequest::single(self.catalog.document_system_instruction(), prompt);

        info!(kind = %kind, fields = request.field_values.len(), "Drafting document");

        backend.generate(&generation).await.map_err(|e| {
            warn!(kind = %kind, status = ?e.status(), error = %e, "Document generation failed");
            ResolveError::Generation(e)
        })
    }
}
