//! Runtime configuration for festival-api
//!
//! The only configuration surface is the database location and the bind
//! address, resolved from CLI flags or environment at process start.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "festival-api", version, about = "Festival management backend")]
pub struct Args {
    /// Path to the SQLite database (created on first run)
    #[arg(long, env = "FESTIVAL_DB", default_value = "festival.db")]
    pub database: PathBuf,

    /// Address to listen on
    #[arg(long, env = "FESTIVAL_BIND", default_value = "127.0.0.1:5730")]
    pub bind: SocketAddr,
}
