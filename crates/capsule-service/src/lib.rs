//! Capsule HTTP API service.
//!
//! This crate provides the HTTP API in front of the capsule storage engine:
//!
//! - Character listing and lookup
//! - Time capsule item listing, per-character filtering, and lookup
//! - Optional serving of the built frontend bundle
//!
//! The service owns all request/response mapping: path parameters are parsed
//! into typed ids, absent store results become `404` responses, and records
//! are serialized directly in their camelCase wire shape. The engine itself
//! performs no validation beyond default substitution.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result
#![allow(clippy::unused_async)] // Handlers stay async over a synchronous engine

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
