//! Artist persistence

use festival_common::db::Artiste;
use sqlx::SqlitePool;

/// Insert a new artist
pub async fn insert_artiste(
    pool: &SqlitePool,
    nom: &str,
    style: Option<&str>,
    description: Option<&str>,
) -> sqlx::Result<i64> {
    let result = sqlx::query("INSERT INTO artistes (nom, style, description) VALUES (?, ?, ?)")
        .bind(nom)
        .bind(style)
        .bind(description)
        .execute(pool)
        .await?;

    Ok(result.last_insert_rowid())
}

/// List all artists, ordered by identifier
pub async fn list_artistes(pool: &SqlitePool) -> sqlx::Result<Vec<Artiste>> {
    sqlx::query_as::<_, Artiste>(
        "SELECT id, nom, style, description FROM artistes ORDER BY id",
    )
    .fetch_all(pool)
    .await
}

/// Load an artist by identifier
pub async fn find_artiste(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Artiste>> {
    sqlx::query_as::<_, Artiste>(
        "SELECT id, nom, style, description FROM artistes WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}
