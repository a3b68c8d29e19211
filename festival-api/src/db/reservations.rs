//! Reservation persistence and attendance counts

use festival_common::db::Reservation;
use sqlx::SqlitePool;

/// Insert a new reservation for an existing concert.
///
/// Presence always starts false.
pub async fn insert_reservation(
    pool: &SqlitePool,
    nom_client: &str,
    email_client: &str,
    concert_id: i64,
) -> sqlx::Result<i64> {
    let result = sqlx::query(
        "INSERT INTO reservations (nom_client, email_client, concert_id) VALUES (?, ?, ?)",
    )
    .bind(nom_client)
    .bind(email_client)
    .bind(concert_id)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// List reservations for one concert, ordered by identifier
pub async fn list_for_concert(
    pool: &SqlitePool,
    concert_id: i64,
) -> sqlx::Result<Vec<Reservation>> {
    sqlx::query_as::<_, Reservation>(
        r#"
        SELECT id, nom_client, email_client, presence, concert_id
        FROM reservations
        WHERE concert_id = ?
        ORDER BY id
        "#,
    )
    .bind(concert_id)
    .fetch_all(pool)
    .await
}

/// Count all reservations for a concert
pub async fn count_total(pool: &SqlitePool, concert_id: i64) -> sqlx::Result<i64> {
    sqlx::query_scalar("SELECT COUNT(*) FROM reservations WHERE concert_id = ?")
        .bind(concert_id)
        .fetch_one(pool)
        .await
}

/// Count reservations marked present for a concert
pub async fn count_participants(pool: &SqlitePool, concert_id: i64) -> sqlx::Result<i64> {
    sqlx::query_scalar("SELECT COUNT(*) FROM reservations WHERE concert_id = ? AND presence = 1")
        .bind(concert_id)
        .fetch_one(pool)
        .await
}
