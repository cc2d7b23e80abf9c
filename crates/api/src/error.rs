use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lostfound_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `lostfound_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database failure, labelled with the operation that hit it.
    #[error("{context}: {source}")]
    Storage {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// A request body that could not be parsed.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Debug rendering of a storage error, carried in the response extensions
/// so [`crate::middleware::error_detail`] can expose it outside production.
#[derive(Debug, Clone)]
pub struct ErrorDetail(pub String);

/// Attach an operation label to repository results.
pub trait StorageContext<T> {
    fn storage_context(self, context: &'static str) -> AppResult<T>;
}

impl<T> StorageContext<T> for Result<T, sqlx::Error> {
    fn storage_context(self, context: &'static str) -> AppResult<T> {
        self.map_err(|source| AppError::Storage { context, source })
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(entity, %id, "Lookup missed");
                (
                    StatusCode::NOT_FOUND,
                    axum::Json(json!({ "error": format!("{entity} not found") })),
                )
                    .into_response()
            }
            AppError::Core(CoreError::MissingFields { required }) => (
                StatusCode::BAD_REQUEST,
                axum::Json(json!({
                    "error": "Missing required fields",
                    "required": required,
                })),
            )
                .into_response(),
            AppError::Core(CoreError::Validation(msg)) | AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                axum::Json(json!({ "error": msg })),
            )
                .into_response(),
            AppError::Storage { context, source } => {
                tracing::error!(error = %source, context, "Database error");
                let mut response = (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    axum::Json(json!({
                        "error": context,
                        "message": source.to_string(),
                    })),
                )
                    .into_response();
                response
                    .extensions_mut()
                    .insert(ErrorDetail(format!("{source:?}")));
                response
            }
        }
    }
}
