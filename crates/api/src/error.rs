//! Error types for the API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use generator_core::GeneratorError;
use scenario::UnrecognizedMode;
use thiserror::Error;

/// Errors that can occur while handling a request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The mode tag is not one of the four known scenarios.
    #[error("{0}")]
    UnrecognizedMode(#[from] UnrecognizedMode),

    /// The upstream generation call failed.
    #[error("Generation error: {0}")]
    Generation(#[from] GeneratorError),

    /// Database error outside the swallowed save path (e.g. history listing).
    #[error("Database error: {0}")]
    Database(#[from] database::DatabaseError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::UnrecognizedMode(err) => {
                tracing::warn!("Rejected request: {}", err);
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            ApiError::Generation(err) => {
                tracing::error!("Generation error: {}", err);
                (StatusCode::BAD_GATEWAY, err.to_string())
            }
            ApiError::Database(err) => {
                tracing::error!("Database error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
