//! Error types shared by the festival services

use thiserror::Error;

/// Common result type for store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failures opening or preparing the store.
///
/// The API service has its own error taxonomy at the handler boundary;
/// this enum only covers what database initialization can produce.
#[derive(Error, Debug)]
pub enum Error {
    /// Query or connection failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Filesystem failure while creating the database location
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
