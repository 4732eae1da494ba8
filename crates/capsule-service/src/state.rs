//! Application state.

use std::sync::Arc;

use capsule_store::MemoryStore;

use crate::config::ServiceConfig;

/// Application state shared across handlers.
///
/// The store is constructed once by the initialization routine and injected
/// here; there is no process-wide singleton.
#[derive(Clone)]
pub struct AppState {
    /// The storage engine.
    pub store: Arc<MemoryStore>,

    /// Service configuration.
    pub config: ServiceConfig,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(store: Arc<MemoryStore>, config: ServiceConfig) -> Self {
        Self { store, config }
    }
}
