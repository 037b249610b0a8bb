use axum::http::StatusCode;
use axum::response::Response;
use serde_json::json;
use wildtrack_core::error::CoreError;
use wildtrack_db::schema::ResolveError;

use crate::response;

/// Application-level error type for HTTP handlers.
///
/// Renders the wire contract's JSON error bodies. Storage errors carry the
/// raw driver text, surfaced in a `details` field only while the server
/// runs with `VERBOSE_ERRORS` on.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A domain error; today only the areas name-column mismatch.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with the contract's message text.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Unmatched method/action pair.
    #[error("Unknown endpoint.")]
    UnknownEndpoint,
}

/// Convenience type alias for dispatch return values.
pub type ApiResult<T> = Result<T, ApiError>;

impl From<ResolveError> for ApiError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::Database(err) => ApiError::Database(err),
            ResolveError::Unsupported(err) => ApiError::Core(err),
        }
    }
}

impl ApiError {
    /// Render the contract's error body.
    ///
    /// Not an `IntoResponse` impl: the `details` gating is configuration
    /// the conversion needs, so the method handlers pass it in.
    pub fn into_response_with(self, verbose_errors: bool) -> Response {
        match self {
            ApiError::Core(err) => {
                tracing::error!(error = %err, "Schema resolution failed");
                response::json_body(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    &json!({ "error": err.to_string() }),
                )
            }
            ApiError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                let details = if verbose_errors {
                    err.to_string()
                } else {
                    "details withheld (VERBOSE_ERRORS is off)".to_string()
                };
                response::json_body(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    &json!({ "error": "Server error", "details": details }),
                )
            }
            ApiError::BadRequest(msg) => {
                response::json_body(StatusCode::BAD_REQUEST, &json!({ "error": msg }))
            }
            ApiError::UnknownEndpoint => response::json_body(
                StatusCode::NOT_FOUND,
                &json!({ "error": "Unknown endpoint." }),
            ),
        }
    }
}
