//! Error types for festival-api
//!
//! Every handler failure is translated to an HTTP status and a JSON
//! `{"message": ...}` body at this boundary. Store-level failures map to a
//! generic 500; internal detail is logged, never sent to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed request field (400)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Duplicate username on registration (400)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Referenced entity absent (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad credentials (401)
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Database error (500, detail not leaked)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal server error (500, detail not leaked)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(msg) | ApiError::Conflict(msg) => {
                (StatusCode::BAD_REQUEST, msg)
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Auth(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Database(ref err) => {
                error!("Database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::Internal(ref msg) => {
                error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({ "message": message }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
