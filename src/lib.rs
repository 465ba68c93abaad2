//! Movies API: REST CRUD over a single `movies` table.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod queries;
pub mod response;
pub mod routes;
pub mod sql;
pub mod state;

pub use config::{AppConfig, DatabaseConfig, Environment};
pub use db::{ensure_database_exists, Database};
pub use error::{ApiError, AppError, ConfigError, StoreError};
pub use models::{Movie, MovieChanges, NewMovie};
pub use queries::{MovieStore, PgMovieStore, SqliteMovieStore};
pub use routes::{app, common_routes, movie_routes, API_PREFIX};
pub use state::AppState;
