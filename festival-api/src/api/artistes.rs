//! Artist endpoints

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{required, MessageResponse};
use crate::db::artistes;
use crate::{ApiResult, AppState};

/// Request payload for POST /api/artistes
#[derive(Debug, Deserialize)]
pub struct CreateArtisteRequest {
    pub nom: Option<String>,
    pub style: Option<String>,
    pub description: Option<String>,
}

/// Artist as exposed by the list endpoint (description stays internal)
#[derive(Debug, Serialize)]
pub struct ArtisteSummary {
    pub id: i64,
    pub nom: String,
    pub style: Option<String>,
}

/// POST /api/artistes
///
/// **Request:** `{"nom": "...", "style": "...", "description": "..."}`
/// (style and description optional)
/// **Errors:** 400 on missing nom
pub async fn create_artiste(
    State(state): State<AppState>,
    Json(payload): Json<CreateArtisteRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let nom = required(payload.nom, "nom")?;

    let id = artistes::insert_artiste(
        &state.db,
        &nom,
        payload.style.as_deref(),
        payload.description.as_deref(),
    )
    .await?;

    info!("Artist created: {} (id {})", nom, id);
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Artiste créé")),
    ))
}

/// GET /api/artistes
pub async fn list_artistes(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ArtisteSummary>>> {
    let artistes = artistes::list_artistes(&state.db)
        .await?
        .into_iter()
        .map(|a| ArtisteSummary {
            id: a.id,
            nom: a.nom,
            style: a.style,
        })
        .collect();

    Ok(Json(artistes))
}

/// Build artist routes
pub fn artiste_routes() -> Router<AppState> {
    Router::new().route("/api/artistes", post(create_artiste).get(list_artistes))
}
