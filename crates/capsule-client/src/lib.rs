//! Capsule Client SDK.
//!
//! This crate provides a client library for consumers of the capsule HTTP API.
//!
//! # Example
//!
//! ```no_run
//! use capsule_client::CapsuleClient;
//!
//! # async fn example() -> Result<(), capsule_client::ClientError> {
//! let client = CapsuleClient::new("http://localhost:8080");
//!
//! // Browse the time capsule
//! let characters = client.list_characters().await?;
//! for character in &characters {
//!     let items = client.items_for_character(character.id).await?;
//!     println!("{}: {} items", character.name, items.len());
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod error;

pub use client::{CapsuleClient, ClientOptions, HealthStatus};
pub use error::ClientError;
