//! Concert endpoints

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::Deserialize;
use tracing::info;

use super::{required, required_id, MessageResponse};
use crate::db::concerts::{self, ConcertSummary};
use crate::db::artistes;
use crate::{ApiError, ApiResult, AppState};

/// Request payload for POST /api/concerts
#[derive(Debug, Deserialize)]
pub struct CreateConcertRequest {
    pub titre: Option<String>,
    pub date: Option<String>,
    pub lieu: Option<String>,
    pub artiste_id: Option<i64>,
}

/// POST /api/concerts
///
/// **Request:** `{"titre": "...", "artiste_id": 1, "date": "...", "lieu": "..."}`
/// (date and lieu optional)
/// **Errors:** 400 on missing field, 404 when the artist does not exist
pub async fn create_concert(
    State(state): State<AppState>,
    Json(payload): Json<CreateConcertRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let titre = required(payload.titre, "titre")?;
    let artiste_id = required_id(payload.artiste_id, "artiste_id")?;

    if artistes::find_artiste(&state.db, artiste_id).await?.is_none() {
        return Err(ApiError::NotFound("Artiste introuvable".to_string()));
    }

    // The foreign key constraint backs the existence check under
    // concurrent deletes or racing requests.
    match concerts::insert_concert(
        &state.db,
        &titre,
        payload.date.as_deref(),
        payload.lieu.as_deref(),
        artiste_id,
    )
    .await
    {
        Ok(id) => {
            info!("Concert created: {} (id {})", titre, id);
            Ok((
                StatusCode::CREATED,
                Json(MessageResponse::new("Concert créé")),
            ))
        }
        Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
            Err(ApiError::NotFound("Artiste introuvable".to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// GET /api/concerts
pub async fn list_concerts(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ConcertSummary>>> {
    let concerts = concerts::list_concerts(&state.db).await?;
    Ok(Json(concerts))
}

/// Build concert routes
pub fn concert_routes() -> Router<AppState> {
    Router::new().route("/api/concerts", post(create_concert).get(list_concerts))
}
