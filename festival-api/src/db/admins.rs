//! Admin account persistence

use festival_common::db::Admin;
use sqlx::SqlitePool;

/// Insert a new admin account.
///
/// Relies on the UNIQUE constraint on `username`: a duplicate registration
/// fails atomically at the store, even under concurrent identical requests.
pub async fn insert_admin(
    pool: &SqlitePool,
    username: &str,
    password_hash: &str,
) -> sqlx::Result<i64> {
    let result = sqlx::query("INSERT INTO admins (username, password_hash) VALUES (?, ?)")
        .bind(username)
        .bind(password_hash)
        .execute(pool)
        .await?;

    Ok(result.last_insert_rowid())
}

/// Load an admin by username
pub async fn find_by_username(pool: &SqlitePool, username: &str) -> sqlx::Result<Option<Admin>> {
    sqlx::query_as::<_, Admin>(
        "SELECT id, username, password_hash FROM admins WHERE username = ?",
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}
