pub mod health;
pub mod items;
pub mod subscriptions;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router};
use serde_json::json;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /health              health check
/// /items               item CRUD
/// /subscriptions       subscription upsert / list / delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/items", items::router())
        .nest("/subscriptions", subscriptions::router())
}

/// Fallback for any path or method nothing else matched.
pub async fn route_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Route not found" })),
    )
}
