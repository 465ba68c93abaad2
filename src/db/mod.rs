//! Connection provider: builds the storage handle for the configured
//! environment and exposes the schema tooling that goes with it.

pub mod migration;

use crate::config::{DatabaseConfig, Environment};
use crate::error::{AppError, StoreError};
use crate::queries::{MovieStore, PgMovieStore, SqliteMovieStore};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::ConnectOptions;
use std::str::FromStr;
use std::sync::Arc;

const CLEAR_MOVIES: &str = r#"DELETE FROM "movies""#;

/// A connected backend. Handlers only see it through [`Database::store`].
#[derive(Clone)]
pub enum Database {
    Postgres(PgMovieStore),
    Sqlite(SqliteMovieStore),
}

impl Database {
    /// Connect using `config`. For PostgreSQL the target database is created
    /// first when missing.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        match config.environment {
            Environment::Development => {
                ensure_database_exists(&config.url).await?;
                let pool = PgPoolOptions::new()
                    .min_connections(config.min_connections)
                    .max_connections(config.max_connections)
                    .connect(&config.url)
                    .await?;
                tracing::info!(max_connections = config.max_connections, "connected to postgres");
                Ok(Database::Postgres(PgMovieStore::new(pool)))
            }
            Environment::Test => {
                let opts = SqliteConnectOptions::from_str(&config.url)
                    .map_err(|e| AppError::DatabaseUrl(e.to_string()))?
                    .create_if_missing(true);
                // An in-memory database lives exactly as long as its connection.
                let pool = SqlitePoolOptions::new()
                    .min_connections(config.min_connections)
                    .max_connections(config.max_connections)
                    .idle_timeout(None)
                    .max_lifetime(None)
                    .connect_with(opts)
                    .await?;
                tracing::info!(url = %config.url, "connected to sqlite");
                Ok(Database::Sqlite(SqliteMovieStore::new(pool)))
            }
        }
    }

    /// Shared handle for route handlers.
    pub fn store(&self) -> Arc<dyn MovieStore> {
        match self {
            Database::Postgres(s) => Arc::new(s.clone()),
            Database::Sqlite(s) => Arc::new(s.clone()),
        }
    }

    pub async fn migrate_latest(&self) -> Result<(), StoreError> {
        match self {
            Database::Postgres(s) => migration::migrate_pg(s.pool()).await?,
            Database::Sqlite(s) => migration::migrate_sqlite(s.pool()).await?,
        }
        tracing::info!("movies table migrated");
        Ok(())
    }

    pub async fn rollback(&self) -> Result<(), StoreError> {
        match self {
            Database::Postgres(s) => migration::rollback_pg(s.pool()).await,
            Database::Sqlite(s) => migration::rollback_sqlite(s.pool()).await,
        }
    }

    /// Replace the table contents with the seed movies.
    pub async fn seed(&self) -> Result<usize, StoreError> {
        match self {
            Database::Postgres(s) => {
                sqlx::query(CLEAR_MOVIES).execute(s.pool()).await?;
            }
            Database::Sqlite(s) => {
                sqlx::query(CLEAR_MOVIES).execute(s.pool()).await?;
            }
        }
        let store = self.store();
        migration::seed(store.as_ref()).await
    }
}

/// Create the database named in `database_url` if it does not exist yet,
/// connecting through the `postgres` maintenance database.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = PgConnectOptions::from_str(&admin_url).map_err(|e| AppError::DatabaseUrl(e.to_string()))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
        tracing::info!(database = %db_name, "created database");
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let path_start = url
        .rfind('/')
        .ok_or_else(|| AppError::DatabaseUrl("no path".into()))?
        + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    Ok((format!("{}postgres", base), db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
