//! Concert persistence

use festival_common::db::Concert;
use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

/// Concert row as returned by the list endpoint.
///
/// `artiste` carries the artist name, resolved with an explicit join.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ConcertSummary {
    pub id: i64,
    pub titre: String,
    pub date: Option<String>,
    pub lieu: Option<String>,
    pub artiste: String,
}

/// Insert a new concert referencing an existing artist
pub async fn insert_concert(
    pool: &SqlitePool,
    titre: &str,
    date: Option<&str>,
    lieu: Option<&str>,
    artiste_id: i64,
) -> sqlx::Result<i64> {
    let result =
        sqlx::query("INSERT INTO concerts (titre, date, lieu, artiste_id) VALUES (?, ?, ?, ?)")
            .bind(titre)
            .bind(date)
            .bind(lieu)
            .bind(artiste_id)
            .execute(pool)
            .await?;

    Ok(result.last_insert_rowid())
}

/// List all concerts with their artist's name
pub async fn list_concerts(pool: &SqlitePool) -> sqlx::Result<Vec<ConcertSummary>> {
    sqlx::query_as::<_, ConcertSummary>(
        r#"
        SELECT c.id, c.titre, c.date, c.lieu, a.nom AS artiste
        FROM concerts c
        JOIN artistes a ON a.id = c.artiste_id
        ORDER BY c.id
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Load a concert by identifier
pub async fn find_concert(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Concert>> {
    sqlx::query_as::<_, Concert>(
        "SELECT id, titre, date, lieu, artiste_id FROM concerts WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}
