//! Shared library for the festival backend
//!
//! Provides the common error type, database initialization (schema creation,
//! pragmas) and the entity records persisted by the API service.

pub mod db;
pub mod error;

pub use error::{Error, Result};
