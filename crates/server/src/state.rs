use std::sync::Arc;

use docdash_core::DocumentStore;

/// Shared across requests. Holds no per-request data.
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>) -> Arc<Self> {
        Arc::new(Self { store })
    }
}
