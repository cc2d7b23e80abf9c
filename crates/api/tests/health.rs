//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get};
use sqlx::PgPool;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Test: GET /api/health returns 200 with expected JSON fields
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_returns_ok_with_json(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["message"], "Server is running");
    let timestamp = json["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404 with a JSON body
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_route_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"error": "Route not found"})
    );

    let app = common::build_test_app(pool);
    let response = get(app, "/api/nothing-here").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn response_contains_x_request_id_header(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/health").await;

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );

    let id_str = request_id.unwrap().to_str().unwrap();
    assert_eq!(id_str.len(), 36, "x-request-id should be a UUID string");
}

// ---------------------------------------------------------------------------
// CORS preflight
// ---------------------------------------------------------------------------

async fn preflight(pool: PgPool, origin: &str, method: &str, uri: &str) -> axum::response::Response {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri(uri)
        .header("Origin", origin)
        .header("Access-Control-Request-Method", method)
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();
    common::build_test_app(pool).oneshot(request).await.unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn preflight_allows_subscription_update_and_unsubscribe(pool: PgPool) {
    for method in ["PUT", "DELETE"] {
        let response = preflight(
            pool.clone(),
            "http://localhost:5173",
            method,
            "/api/subscriptions/device-1",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let headers = response.headers();
        assert_eq!(
            headers["access-control-allow-origin"],
            "http://localhost:5173"
        );
        assert_eq!(headers["access-control-allow-credentials"], "true");
        let allow_methods = headers["access-control-allow-methods"].to_str().unwrap();
        assert!(
            allow_methods.contains(method),
            "Allow-Methods should contain {method}, got: {allow_methods}"
        );
        assert!(!allow_methods.contains("PATCH"));
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn preflight_from_unlisted_origin_gets_no_allow_origin(pool: PgPool) {
    let response = preflight(pool, "https://evil.example.com", "POST", "/api/items").await;
    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());
}
