//! Server binary: reads configuration from the environment, connects to the
//! configured database, migrates (and optionally seeds), then serves the API.

use movies_api::{app, AppConfig, AppState, Database};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("movies_api=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(environment = ?config.database.environment, "starting");

    let database = Database::connect(&config.database).await?;
    database.migrate_latest().await?;
    if config.seed {
        database.seed().await?;
    }

    let state = AppState::new(database.store());
    let router = app(state, config.body_limit_bytes);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
