//! Character handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;

use capsule_core::{Character, CharacterId};
use capsule_store::Store;

use crate::error::ApiError;
use crate::state::AppState;

/// List all characters in creation order.
pub async fn list_characters(State(state): State<Arc<AppState>>) -> Json<Vec<Character>> {
    Json(state.store.list_characters())
}

/// Get a single character by id.
pub async fn get_character(
    State(state): State<Arc<AppState>>,
    Path(id): Path<CharacterId>,
) -> Result<Json<Character>, ApiError> {
    let character = state
        .store
        .get_character(id)
        .ok_or_else(|| ApiError::not_found("Character", id))?;

    Ok(Json(character))
}
