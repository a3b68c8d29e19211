//! Concert statistics endpoint

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::db::{concerts, reservations};
use crate::stats::attendance_rate;
use crate::{ApiError, ApiResult, AppState};

/// Response payload for GET /api/concerts/:id/stats
#[derive(Debug, Serialize)]
pub struct ConcertStatsResponse {
    /// Concert title
    pub concert: String,
    /// Total reservation count
    pub total: i64,
    /// Reservations marked present
    pub participants: i64,
    /// Attendance rate, two decimals with trailing %
    pub taux: String,
}

/// GET /api/concerts/:id/stats
///
/// Counts are recomputed on every request.
/// **Errors:** 404 when the concert does not exist
pub async fn concert_stats(
    State(state): State<AppState>,
    Path(concert_id): Path<i64>,
) -> ApiResult<Json<ConcertStatsResponse>> {
    let concert = concerts::find_concert(&state.db, concert_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Concert introuvable".to_string()))?;

    let total = reservations::count_total(&state.db, concert_id).await?;
    let participants = reservations::count_participants(&state.db, concert_id).await?;

    Ok(Json(ConcertStatsResponse {
        concert: concert.titre,
        total,
        participants,
        taux: attendance_rate(participants, total),
    }))
}

/// Build statistics routes
pub fn stats_routes() -> Router<AppState> {
    Router::new().route("/api/concerts/:id/stats", get(concert_stats))
}
