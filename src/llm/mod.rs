// src/llm/mod.rs
// Generative-language backend clients

mod backend;
mod gemini;
pub(crate) mod http_client;
mod logging;
pub mod types;

pub use backend::{BackendError, GenerationRequest, GenerativeBackend};
pub use gemini::GeminiClient;
pub use types::{ConversationTurn, Role};
