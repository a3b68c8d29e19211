//! Entity records persisted by the festival backend
//!
//! One struct per table, mapped straight from its columns. Identifiers are
//! assigned by SQLite (AUTOINCREMENT), monotonic and unique per table.
//! Wire shapes are separate DTOs in the API service; these records never
//! serialize directly.

use sqlx::FromRow;

/// Administrator account
///
/// `password_hash` is an Argon2id PHC string; the raw password is never
/// stored.
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
}

/// Performing artist
#[derive(Debug, Clone, FromRow)]
pub struct Artiste {
    pub id: i64,
    pub nom: String,
    pub style: Option<String>,
    pub description: Option<String>,
}

/// Concert given by exactly one artist
#[derive(Debug, Clone, FromRow)]
pub struct Concert {
    pub id: i64,
    pub titre: String,
    pub date: Option<String>,
    pub lieu: Option<String>,
    pub artiste_id: i64,
}

/// Client reservation for a concert
///
/// `presence` defaults to false at creation and flips when the client
/// checks in at the venue.
#[derive(Debug, Clone, FromRow)]
pub struct Reservation {
    pub id: i64,
    pub nom_client: String,
    pub email_client: String,
    pub presence: bool,
    pub concert_id: i64,
}
