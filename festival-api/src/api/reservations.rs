//! Reservation endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{required, required_id, MessageResponse};
use crate::db::concerts;
use crate::db::reservations;
use crate::{ApiError, ApiResult, AppState};

/// Request payload for POST /api/reservations
#[derive(Debug, Deserialize)]
pub struct CreateReservationRequest {
    pub nom_client: Option<String>,
    pub email_client: Option<String>,
    pub concert_id: Option<i64>,
}

/// Reservation as exposed by the per-concert list endpoint
#[derive(Debug, Serialize)]
pub struct ReservationSummary {
    pub id: i64,
    pub nom_client: String,
    pub email_client: String,
    pub presence: bool,
}

/// POST /api/reservations
///
/// **Request:** `{"nom_client": "...", "email_client": "...", "concert_id": 1}`
/// **Errors:** 400 on missing field, 404 when the concert does not exist
pub async fn create_reservation(
    State(state): State<AppState>,
    Json(payload): Json<CreateReservationRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let nom_client = required(payload.nom_client, "nom_client")?;
    let email_client = required(payload.email_client, "email_client")?;
    let concert_id = required_id(payload.concert_id, "concert_id")?;

    if concerts::find_concert(&state.db, concert_id).await?.is_none() {
        return Err(ApiError::NotFound("Concert introuvable".to_string()));
    }

    match reservations::insert_reservation(&state.db, &nom_client, &email_client, concert_id).await
    {
        Ok(id) => {
            info!("Reservation created for concert {} (id {})", concert_id, id);
            Ok((
                StatusCode::CREATED,
                Json(MessageResponse::new("Réservation créée")),
            ))
        }
        Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
            Err(ApiError::NotFound("Concert introuvable".to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// GET /api/concerts/:id/reservations
pub async fn list_concert_reservations(
    State(state): State<AppState>,
    Path(concert_id): Path<i64>,
) -> ApiResult<Json<Vec<ReservationSummary>>> {
    let reservations = reservations::list_for_concert(&state.db, concert_id)
        .await?
        .into_iter()
        .map(|r| ReservationSummary {
            id: r.id,
            nom_client: r.nom_client,
            email_client: r.email_client,
            presence: r.presence,
        })
        .collect();

    Ok(Json(reservations))
}

/// Build reservation routes
pub fn reservation_routes() -> Router<AppState> {
    Router::new()
        .route("/api/reservations", post(create_reservation))
        .route(
            "/api/concerts/:id/reservations",
            get(list_concert_reservations),
        )
}
