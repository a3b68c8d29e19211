//! Database access layer shared by the festival services

mod init;
mod models;

pub use init::{init_database, init_memory_database};
pub use models::{Admin, Artiste, Concert, Reservation};
