//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{characters, health, items};
use crate::state::AppState;

/// Create the service router with all routes and middleware.
///
/// # Routes
///
/// - `GET /health` - Health check
/// - `GET /api/characters` - List all characters
/// - `GET /api/characters/:id` - Get a single character
/// - `GET /api/characters/:id/items` - List a character's items
/// - `GET /api/items` - List all items
/// - `GET /api/items/:id` - Get a single item
///
/// When the configured static directory exists, unmatched routes serve the
/// frontend bundle with an `index.html` fallback for SPA routing.
pub fn create_router(state: AppState) -> Router {
    // Extract config values before moving state
    let cors_origins = state.config.cors_origins.clone();
    let max_body_bytes = state.config.max_body_bytes;
    let request_timeout_seconds = state.config.request_timeout_seconds;
    let static_dir = state.config.static_dir.clone();

    // Build CORS layer
    let cors = build_cors_layer(&cors_origins);

    let state = Arc::new(state);

    let router = Router::new()
        // Health (public)
        .route("/health", get(health::health))
        // Characters
        .route("/api/characters", get(characters::list_characters))
        .route("/api/characters/:id", get(characters::get_character))
        .route(
            "/api/characters/:id/items",
            get(items::list_items_for_character),
        )
        // Items
        .route("/api/items", get(items::list_items))
        .route("/api/items/:id", get(items::get_item))
        .with_state(state);

    // Frontend bundle, when present
    let router = if Path::new(&static_dir).is_dir() {
        tracing::info!(static_dir = %static_dir, "Serving frontend bundle");
        let index_path = PathBuf::from(&static_dir).join("index.html");
        // SPA fallback - unmatched routes serve index.html
        router.fallback_service(
            ServeDir::new(&static_dir).fallback(ServeFile::new(index_path)),
        )
    } else {
        tracing::info!(static_dir = %static_dir, "Static directory not found, running API-only");
        router
    };

    router
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            request_timeout_seconds,
        )))
}

/// Build the CORS layer from configured origins.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
