//! Time capsule item handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;

use capsule_core::{CharacterId, Item, ItemId};
use capsule_store::Store;

use crate::error::ApiError;
use crate::state::AppState;

/// List all items in creation order.
pub async fn list_items(State(state): State<Arc<AppState>>) -> Json<Vec<Item>> {
    Json(state.store.list_items())
}

/// List the items owned by a character.
///
/// Responds `200 []` for a character id no item references; the store does
/// not distinguish "unknown character" from "character with no items", and
/// neither does this endpoint.
pub async fn list_items_for_character(
    State(state): State<Arc<AppState>>,
    Path(character_id): Path<CharacterId>,
) -> Json<Vec<Item>> {
    Json(state.store.list_items_by_character(character_id))
}

/// Get a single item by id.
pub async fn get_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<ItemId>,
) -> Result<Json<Item>, ApiError> {
    let item = state
        .store
        .get_item(id)
        .ok_or_else(|| ApiError::not_found("Item", id))?;

    Ok(Json(item))
}
