//! Handlers for lost-and-found items.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use lostfound_core::error::CoreError;
use lostfound_db::models::item::{CreateItem, Item, UpdateItem};
use lostfound_db::repositories::ItemRepo;

use crate::error::{AppError, AppResult, StorageContext};
use crate::extract::AppJson;
use crate::response::MessageResponse;
use crate::state::AppState;

fn item_not_found(id: String) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Item", id })
}

// ---------------------------------------------------------------------------
// GET /items
// ---------------------------------------------------------------------------

/// List every item, newest first.
pub async fn list_items(State(state): State<AppState>) -> AppResult<Json<Vec<Item>>> {
    let items = ItemRepo::list(&state.pool)
        .await
        .storage_context("Failed to fetch items")?;
    Ok(Json(items))
}

// ---------------------------------------------------------------------------
// GET /items/{id}
// ---------------------------------------------------------------------------

pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Item>> {
    let item = ItemRepo::find_by_id(&state.pool, &id)
        .await
        .storage_context("Failed to fetch item")?
        .ok_or_else(|| item_not_found(id))?;
    Ok(Json(item))
}

// ---------------------------------------------------------------------------
// POST /items
// ---------------------------------------------------------------------------

/// Create an item. `id` and `date` are filled in when the caller omits them.
pub async fn create_item(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateItem>,
) -> AppResult<impl IntoResponse> {
    let new_item = input.validate(chrono::Utc::now())?;

    let item = ItemRepo::create(&state.pool, &new_item)
        .await
        .storage_context("Failed to create item")?;

    tracing::info!(item_id = %item.id, kind = %item.kind, "Item created");

    Ok((StatusCode::CREATED, Json(item)))
}

// ---------------------------------------------------------------------------
// PUT /items/{id}
// ---------------------------------------------------------------------------

/// Apply a partial update. An empty patch returns the current row unchanged.
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(patch): AppJson<UpdateItem>,
) -> AppResult<Json<Item>> {
    patch.validate()?;

    let result = if patch.is_empty() {
        ItemRepo::find_by_id(&state.pool, &id).await
    } else {
        ItemRepo::update(&state.pool, &id, &patch).await
    };

    let item = result
        .storage_context("Failed to update item")?
        .ok_or_else(|| item_not_found(id))?;

    if !patch.is_empty() {
        tracing::info!(item_id = %item.id, "Item updated");
    }

    Ok(Json(item))
}

// ---------------------------------------------------------------------------
// DELETE /items/{id}
// ---------------------------------------------------------------------------

pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = ItemRepo::delete(&state.pool, &id)
        .await
        .storage_context("Failed to delete item")?;

    if !deleted {
        return Err(item_not_found(id));
    }

    tracing::info!(item_id = %id, "Item deleted");

    Ok(Json(MessageResponse {
        message: "Item deleted successfully",
    }))
}
