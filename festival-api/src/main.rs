//! festival-api - Festival management backend
//!
//! HTTP/JSON service over four entities (admins, artists, concerts,
//! reservations) backed by SQLite, with a credential check endpoint and a
//! per-concert attendance statistics endpoint.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use festival_api::config::Args;
use festival_api::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!(
        "Starting festival-api v{}",
        env!("CARGO_PKG_VERSION")
    );

    let args = Args::parse();
    info!("Database path: {}", args.database.display());

    // Open or create the database; schema creation is idempotent
    let pool = festival_common::db::init_database(&args.database).await?;
    info!("Database connection established");

    let state = AppState::new(pool);
    let app = festival_api::build_router(state);

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    info!("festival-api listening on http://{}", args.bind);
    info!("Health check: http://{}/health", args.bind);

    axum::serve(listener, app).await?;

    Ok(())
}
