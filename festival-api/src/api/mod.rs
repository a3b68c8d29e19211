//! HTTP API handlers for festival-api

pub mod admin;
pub mod artistes;
pub mod concerts;
pub mod health;
pub mod reservations;
pub mod stats;

pub use admin::admin_routes;
pub use artistes::artiste_routes;
pub use concerts::concert_routes;
pub use health::health_routes;
pub use reservations::reservation_routes;
pub use stats::stats_routes;

use crate::{ApiError, ApiResult};
use serde::Serialize;

/// Standard `{"message": ...}` response body
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Presence check for a required string field.
///
/// Whitespace-only values count as missing.
pub(crate) fn required(value: Option<String>, field: &str) -> ApiResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ApiError::Validation(format!(
            "Champ requis manquant: {}",
            field
        ))),
    }
}

/// Presence check for a required identifier field
pub(crate) fn required_id(value: Option<i64>, field: &str) -> ApiResult<i64> {
    value.ok_or_else(|| ApiError::Validation(format!("Champ requis manquant: {}", field)))
}
