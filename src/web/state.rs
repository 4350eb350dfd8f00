// src/web/state.rs
// Web server state

use std::sync::Arc;

use crate::proxy::GenerationProxy;

/// Shared application state. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub proxy: Arc<GenerationProxy>,
}

impl AppState {
    pub fn new(proxy: GenerationProxy) -> Self {
        Self {
            proxy: Arc::new(proxy),
        }
    }
}
