//! festival-api library - festival management HTTP service
//!
//! Exposes the application state, router construction and handler modules
//! for the binary and for integration tests.

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod stats;

pub use crate::error::{ApiError, ApiResult};

use axum::Router;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

/// Application state shared across HTTP handlers
///
/// The pool is the only shared resource; handlers hold no state between
/// requests. The state is injected per handler, never a global.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Service startup timestamp for uptime reporting
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(db: SqlitePool) -> Self {
        Self {
            db,
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::admin_routes())
        .merge(api::artiste_routes())
        .merge(api::concert_routes())
        .merge(api::reservation_routes())
        .merge(api::stats_routes())
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
