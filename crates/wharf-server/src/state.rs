use std::sync::Arc;

use wharf_core::WorkspaceRegistry;

use crate::config::PubConfig;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<PubConfig>,
    pub registry: Arc<WorkspaceRegistry>,
}

impl AppState {
    /// Build the registry for this configuration's storage backend.
    pub fn new(config: PubConfig) -> Self {
        let registry = Arc::new(WorkspaceRegistry::new(config.storage.factory()));
        Self {
            config: Arc::new(config),
            registry,
        }
    }
}
