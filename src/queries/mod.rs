//! Movie queries: one trait method per statement against the `movies` table,
//! implemented for PostgreSQL and SQLite.

mod postgres;
mod sqlite;

pub use postgres::PgMovieStore;
pub use sqlite::SqliteMovieStore;

use crate::error::StoreError;
use crate::models::{Movie, MovieChanges, NewMovie};
use async_trait::async_trait;

/// Query-execution capability injected into the route handlers.
///
/// Ids arrive as the raw path segment. Lookups and updates pass them through
/// to storage unchanged; only [`MovieStore::delete_movie`] coerces to an
/// integer first.
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// All rows, ordered by id.
    async fn get_all_movies(&self) -> Result<Vec<Movie>, StoreError>;

    /// Rows matching `id`. Zero or one in practice; callers check the length.
    async fn get_single_movie(&self, id: &str) -> Result<Vec<Movie>, StoreError>;

    /// Insert one row and return what storage persisted, generated id included.
    async fn add_movie(&self, movie: &NewMovie) -> Result<Vec<Movie>, StoreError>;

    /// Update the fields present in `changes`. Returns affected-row count.
    async fn edit_movie(&self, id: &str, changes: &MovieChanges) -> Result<u64, StoreError>;

    /// Delete by id. Returns affected-row count; 0 means nothing matched.
    async fn delete_movie(&self, id: &str) -> Result<u64, StoreError>;

    /// Round-trip to storage for readiness checks.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Integer coercion applied before a delete.
pub fn parse_movie_id(raw: &str) -> Result<i64, StoreError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| StoreError::InvalidId(raw.to_string()))
}
