// src/web/types.rs
// JSON request/response bodies for the HTTP API

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::llm::ConversationTurn;
use crate::proxy::DocumentRequest;

/// POST /api/chat
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatBody {
    pub messages: Vec<ConversationTurn>,
    #[serde(default)]
    pub module_context: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatReply {
    pub message: String,
}

/// POST /api/generate-document
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentBody {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub user_inputs: IndexMap<String, String>,
}

impl From<DocumentBody> for DocumentRequest {
    fn from(body: DocumentBody) -> Self {
        Self {
            kind: body.kind,
            context: body.context,
            field_values: body.user_inputs,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DocumentReply {
    pub document: String,
}

/// GET /health
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReply {
    pub status: String,
    pub version: String,
    pub backend_configured: bool,
    pub model: Option<String>,
}
