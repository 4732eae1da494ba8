//! Capsule Service - HTTP API for the time capsule content store
//!
//! This is the main entry point for the capsule service.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use capsule_service::{create_router, AppState, ServiceConfig};
use capsule_store::{MemoryStore, Store};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,capsule=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Capsule Service");

    // Load configuration from environment
    let config = ServiceConfig::from_env();

    tracing::info!(
        listen_addr = %config.listen_addr,
        static_dir = %config.static_dir,
        "Service configuration loaded"
    );

    // Construct and seed the in-memory store. Seeding completes before the
    // store is handed to any handler.
    let store = Arc::new(MemoryStore::seeded());
    tracing::info!(
        characters = store.list_characters().len(),
        items = store.list_items().len(),
        "Store seeded"
    );

    // Build app state
    let state = AppState::new(store, config.clone());

    // Create the router
    let app = create_router(state);
    tracing::info!("Router configured with all API endpoints");

    // Start HTTP server
    tracing::info!(listen_addr = %config.listen_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
