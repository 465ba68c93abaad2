//! Example consumer: a separate Rust project that mounts the movies routes
//! next to its own.
//!
//! Run from repo root: `cargo run -p example-consumer`
//! Or from this directory: `cargo run`

use axum::{routing::get, Router};
use movies_api::{common_routes, movie_routes, AppState, Database, DatabaseConfig, Environment};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("movies_api=info")),
        )
        .init();

    // In-memory SQLite with seed data, so no database server is needed.
    let database = Database::connect(&DatabaseConfig::for_environment(Environment::Test)).await?;
    database.migrate_latest().await?;
    database.seed().await?;
    let state = AppState::new(database.store());

    let app = Router::new()
        .merge(common_routes(state.clone()))
        .nest("/catalog", movie_routes(state))
        .route("/about", get(|| async { "movies-api example consumer" }));

    let listener = TcpListener::bind("127.0.0.1:3000").await?;
    let port = listener.local_addr()?.port();
    tracing::info!("Example consumer listening on http://127.0.0.1:{}", port);
    axum::serve(listener, app).await?;
    Ok(())
}
