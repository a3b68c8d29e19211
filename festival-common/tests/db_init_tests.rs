//! Tests for database initialization and store-enforced constraints
//!
//! Covers automatic schema creation, idempotent re-open, username
//! uniqueness and referential integrity at the SQLite level.

use festival_common::db::{init_database, init_memory_database, Artiste, Concert, Reservation};
use tempfile::TempDir;

#[tokio::test]
async fn test_database_creation_when_missing() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("festival.db");
    assert!(!db_path.exists());

    let result = init_database(&db_path).await;
    assert!(result.is_ok(), "Database initialization failed: {:?}", result.err());
    assert!(db_path.exists(), "Database file was not created");
}

#[tokio::test]
async fn test_database_opens_existing() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("festival.db");

    let pool1 = init_database(&db_path).await;
    assert!(pool1.is_ok());
    drop(pool1);

    // Second open must succeed and leave the schema intact
    let pool2 = init_database(&db_path).await;
    assert!(pool2.is_ok(), "Failed to open existing database: {:?}", pool2.err());
}

#[tokio::test]
async fn test_all_tables_created() {
    let pool = init_memory_database().await.unwrap();

    for table in ["admins", "artistes", "concerts", "reservations"] {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
        )
        .bind(table)
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(count, 1, "Table {} was not created", table);
    }
}

#[tokio::test]
async fn test_username_uniqueness_enforced_by_store() {
    let pool = init_memory_database().await.unwrap();

    sqlx::query("INSERT INTO admins (username, password_hash) VALUES (?, ?)")
        .bind("alice")
        .bind("hash-1")
        .execute(&pool)
        .await
        .unwrap();

    let duplicate = sqlx::query("INSERT INTO admins (username, password_hash) VALUES (?, ?)")
        .bind("alice")
        .bind("hash-2")
        .execute(&pool)
        .await;

    match duplicate {
        Err(sqlx::Error::Database(db_err)) => {
            assert!(db_err.is_unique_violation(), "Expected unique violation, got {}", db_err);
        }
        other => panic!("Expected unique violation, got {:?}", other),
    }

    // Exactly one row survives the failed insert
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM admins WHERE username = 'alice'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_concert_requires_existing_artist() {
    let pool = init_memory_database().await.unwrap();

    let result = sqlx::query("INSERT INTO concerts (titre, artiste_id) VALUES (?, ?)")
        .bind("Live")
        .bind(42_i64)
        .execute(&pool)
        .await;

    match result {
        Err(sqlx::Error::Database(db_err)) => {
            assert!(
                db_err.is_foreign_key_violation(),
                "Expected foreign key violation, got {}",
                db_err
            );
        }
        other => panic!("Expected foreign key violation, got {:?}", other),
    }
}

#[tokio::test]
async fn test_reservation_requires_existing_concert() {
    let pool = init_memory_database().await.unwrap();

    let result = sqlx::query(
        "INSERT INTO reservations (nom_client, email_client, concert_id) VALUES (?, ?, ?)",
    )
    .bind("A")
    .bind("a@x.com")
    .bind(42_i64)
    .execute(&pool)
    .await;

    assert!(result.is_err(), "Insert with dangling concert_id must fail");
}

#[tokio::test]
async fn test_reservation_presence_defaults_to_false() {
    let pool = init_memory_database().await.unwrap();

    sqlx::query("INSERT INTO artistes (nom) VALUES ('Daft Punk')")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO concerts (titre, artiste_id) VALUES ('Live', 1)")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO reservations (nom_client, email_client, concert_id) VALUES ('A', 'a@x.com', 1)")
        .execute(&pool)
        .await
        .unwrap();

    let presence: bool = sqlx::query_scalar("SELECT presence FROM reservations WHERE id = 1")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert!(!presence);
}

#[tokio::test]
async fn test_entity_row_mapping() {
    let pool = init_memory_database().await.unwrap();

    sqlx::query("INSERT INTO artistes (nom, style) VALUES ('Daft Punk', 'Electro')")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO concerts (titre, lieu, artiste_id) VALUES ('Live', 'Paris', 1)")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO reservations (nom_client, email_client, concert_id) VALUES ('A', 'a@x.com', 1)")
        .execute(&pool)
        .await
        .unwrap();

    let artiste = sqlx::query_as::<_, Artiste>(
        "SELECT id, nom, style, description FROM artistes WHERE id = 1",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(artiste.nom, "Daft Punk");
    assert_eq!(artiste.style.as_deref(), Some("Electro"));
    assert_eq!(artiste.description, None);

    let concert = sqlx::query_as::<_, Concert>(
        "SELECT id, titre, date, lieu, artiste_id FROM concerts WHERE id = 1",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(concert.titre, "Live");
    assert_eq!(concert.artiste_id, artiste.id);

    let reservation = sqlx::query_as::<_, Reservation>(
        "SELECT id, nom_client, email_client, presence, concert_id FROM reservations WHERE id = 1",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(reservation.email_client, "a@x.com");
    assert!(!reservation.presence);
    assert_eq!(reservation.concert_id, concert.id);
}
