//! Admin registration and login endpoints
//!
//! No session is issued: login is a single credential check. Passwords are
//! hashed before they reach the store and are never logged.

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::Deserialize;
use tracing::info;

use super::{required, MessageResponse};
use crate::{auth, db, ApiError, ApiResult, AppState};

/// Request payload for POST /api/admin/register and /api/admin/login
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// POST /api/admin/register
///
/// **Request:** `{"username": "...", "password": "..."}`
/// **Errors:** 400 on missing field or duplicate username
pub async fn register_admin(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let username = required(payload.username, "username")?;
    let password = required(payload.password, "password")?;

    let password_hash = auth::hash_password(&password)?;

    // The UNIQUE constraint is the authority on duplicates; no
    // check-then-insert race.
    match db::admins::insert_admin(&state.db, &username, &password_hash).await {
        Ok(_) => {
            info!("Admin account created: {}", username);
            Ok((
                StatusCode::CREATED,
                Json(MessageResponse::new("Administrateur enregistré")),
            ))
        }
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => Err(
            ApiError::Conflict("Nom d'utilisateur déjà pris".to_string()),
        ),
        Err(e) => Err(e.into()),
    }
}

/// POST /api/admin/login
///
/// **Request:** `{"username": "...", "password": "..."}`
/// **Errors:** 400 on missing field, 401 on bad credentials
pub async fn login_admin(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let username = required(payload.username, "username")?;
    let password = required(payload.password, "password")?;

    // Unknown username and wrong password produce the same response
    let admin = db::admins::find_by_username(&state.db, &username).await?;
    let verified = admin
        .map(|a| auth::verify_password(&password, &a.password_hash))
        .unwrap_or(false);

    if !verified {
        return Err(ApiError::Auth("Identifiants invalides".to_string()));
    }

    info!("Admin login: {}", username);
    Ok(Json(MessageResponse::new("Connexion réussie")))
}

/// Build admin routes
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/api/admin/register", post(register_admin))
        .route("/api/admin/login", post(login_admin))
}
