//! Common test utilities for capsule integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;

use capsule_service::{create_router, AppState, ServiceConfig};
use capsule_store::MemoryStore;

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// The store backing the server, for direct assertions.
    pub store: Arc<MemoryStore>,
}

impl TestHarness {
    /// Create a new test harness with a freshly seeded store.
    pub fn new() -> Self {
        Self::with_store(MemoryStore::seeded())
    }

    /// Create a test harness around a specific store.
    pub fn with_store(store: MemoryStore) -> Self {
        let store = Arc::new(store);

        let config = ServiceConfig {
            listen_addr: "127.0.0.1:0".into(),
            // Point at a directory that never exists so tests run API-only.
            static_dir: "nonexistent-static-dir".into(),
            cors_origins: vec!["*".into()],
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 30,
        };

        let state = AppState::new(Arc::clone(&store), config);
        let router: Router = create_router(state);

        let server = TestServer::new(router).expect("Failed to create test server");

        Self { server, store }
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
