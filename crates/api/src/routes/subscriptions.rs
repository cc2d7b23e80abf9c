//! Route definitions for subscriptions, mounted at `/subscriptions`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::subscriptions;
use crate::state::AppState;

/// ```text
/// GET    /          -> list_subscriptions
/// POST   /          -> subscribe
/// PUT    /{token}   -> update_subscription
/// DELETE /{token}   -> unsubscribe
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(subscriptions::list_subscriptions).post(subscriptions::subscribe),
        )
        .route(
            "/{token}",
            put(subscriptions::update_subscription).delete(subscriptions::unsubscribe),
        )
}
