//! Capsule HTTP client implementation.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use capsule_core::{Character, CharacterId, Item, ItemId};

use crate::error::ClientError;

/// Capsule API client.
///
/// Provides typed access to the character and item endpoints. Records are
/// decoded into the shared [`capsule_core`] types.
#[derive(Debug, Clone)]
pub struct CapsuleClient {
    client: Client,
    base_url: String,
}

impl CapsuleClient {
    /// Create a new capsule client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the capsule service (e.g., `"http://localhost:8080"`)
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_options(base_url, ClientOptions::default())
    }

    /// Create a new capsule client with custom options.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built (should not happen with default settings).
    #[must_use]
    pub fn with_options(base_url: impl Into<String>, options: ClientOptions) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_seconds))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Check service health.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    /// List all characters in creation order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_characters(&self) -> Result<Vec<Character>, ClientError> {
        let url = format!("{}/api/characters", self.base_url);
        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    /// Get a single character by id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] if no character has the id.
    pub async fn get_character(&self, id: CharacterId) -> Result<Character, ClientError> {
        let url = format!("{}/api/characters/{id}", self.base_url);
        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    /// List all items in creation order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_items(&self) -> Result<Vec<Item>, ClientError> {
        let url = format!("{}/api/items", self.base_url);
        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    /// List the items owned by a character.
    ///
    /// An unknown character id yields a successful empty list, mirroring the
    /// engine contract; the service cannot distinguish "unknown character"
    /// from "character with no items".
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn items_for_character(
        &self,
        character_id: CharacterId,
    ) -> Result<Vec<Item>, ClientError> {
        let url = format!("{}/api/characters/{character_id}/items", self.base_url);
        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    /// Get a single item by id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] if no item has the id.
    pub async fn get_item(&self, id: ItemId) -> Result<Item, ClientError> {
        let url = format!("{}/api/items/{id}", self.base_url);
        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    /// Handle API response and convert errors.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        // Try to parse error response
        let error_body: Result<ApiErrorResponse, _> = response.json().await;

        match error_body {
            Ok(api_error) => {
                let code = api_error.error.code;
                let message = api_error.error.message;
                tracing::debug!(code = %code, status = %status, "API error response");

                if code == "not_found" {
                    Err(ClientError::NotFound { message })
                } else {
                    Err(ClientError::Api {
                        code,
                        message,
                        status: status.as_u16(),
                    })
                }
            }
            Err(_) => Err(ClientError::Api {
                code: "unknown".to_string(),
                message: format!("HTTP {status}"),
                status: status.as_u16(),
            }),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    /// Service status ("ok" when healthy).
    pub status: String,
    /// Service name.
    pub service: String,
    /// Service version.
    pub version: String,
}

/// The service's JSON error envelope.
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: String,
    message: String,
}

/// Client options for customization.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Request timeout in seconds (default: 30).
    pub timeout_seconds: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let client = CapsuleClient::new("http://localhost:8080");
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn client_trims_trailing_slash() {
        let client = CapsuleClient::new("http://localhost:8080/");
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn client_options_timeout() {
        let options = ClientOptions {
            timeout_seconds: 5,
        };
        let _client = CapsuleClient::with_options("http://localhost:8080", options);
    }
}
