//! Handlers for push-notification subscriptions.
//!
//! Subscribing and updating share one upsert keyed on `fcm_token`, so a
//! device that registers twice keeps a single row.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use lostfound_core::error::CoreError;
use lostfound_db::models::subscription::{CreateSubscription, Subscription, UpdateSubscription};
use lostfound_db::repositories::SubscriptionRepo;

use crate::error::{AppError, AppResult, StorageContext};
use crate::extract::AppJson;
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /subscriptions
// ---------------------------------------------------------------------------

pub async fn subscribe(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateSubscription>,
) -> AppResult<impl IntoResponse> {
    let upsert = input.validate()?;

    let saved = SubscriptionRepo::upsert(&state.pool, &upsert)
        .await
        .storage_context("Failed to subscribe")?;

    tracing::info!(subscription_id = saved.id, "Subscription saved");

    Ok((StatusCode::CREATED, Json(saved)))
}

// ---------------------------------------------------------------------------
// GET /subscriptions
// ---------------------------------------------------------------------------

pub async fn list_subscriptions(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Subscription>>> {
    let subscriptions = SubscriptionRepo::list(&state.pool)
        .await
        .storage_context("Failed to fetch subscriptions")?;
    Ok(Json(subscriptions))
}

// ---------------------------------------------------------------------------
// PUT /subscriptions/{token}
// ---------------------------------------------------------------------------

/// Replace email and preferences for the token in the path, creating the
/// subscription if it does not exist yet.
pub async fn update_subscription(
    State(state): State<AppState>,
    Path(token): Path<String>,
    AppJson(input): AppJson<UpdateSubscription>,
) -> AppResult<Json<Subscription>> {
    let upsert = input.validate(&token)?;

    let updated = SubscriptionRepo::upsert(&state.pool, &upsert)
        .await
        .storage_context("Failed to update subscription")?;

    tracing::info!(subscription_id = updated.id, "Subscription updated");

    Ok(Json(updated))
}

// ---------------------------------------------------------------------------
// DELETE /subscriptions/{token}
// ---------------------------------------------------------------------------

pub async fn unsubscribe(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = SubscriptionRepo::delete_by_token(&state.pool, &token)
        .await
        .storage_context("Failed to unsubscribe")?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Subscription",
            id: token,
        }));
    }

    tracing::info!("Subscription removed");

    Ok(Json(MessageResponse {
        message: "Unsubscribed successfully",
    }))
}
