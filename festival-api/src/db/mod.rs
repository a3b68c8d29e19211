//! Database operations for festival-api
//!
//! One module per entity. All functions return `sqlx::Result` so handlers
//! can inspect constraint violations before converting to an API error.

pub mod admins;
pub mod artistes;
pub mod concerts;
pub mod reservations;
