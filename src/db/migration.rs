//! Schema tooling for the `movies` table: migrate to latest, roll back, seed.
//! DDL is idempotent (`IF NOT EXISTS` / `IF EXISTS`).

use crate::error::StoreError;
use crate::models::NewMovie;
use crate::queries::MovieStore;
use sqlx::{PgPool, SqlitePool};

const PG_CREATE_MOVIES: &str = r#"
    CREATE TABLE IF NOT EXISTS "movies" (
        "id" BIGSERIAL PRIMARY KEY,
        "name" TEXT NOT NULL,
        "genre" TEXT NOT NULL,
        "rating" DOUBLE PRECISION NOT NULL,
        "explicit" BOOLEAN NOT NULL
    )
"#;

const SQLITE_CREATE_MOVIES: &str = r#"
    CREATE TABLE IF NOT EXISTS "movies" (
        "id" INTEGER PRIMARY KEY AUTOINCREMENT,
        "name" TEXT NOT NULL,
        "genre" TEXT NOT NULL,
        "rating" REAL NOT NULL,
        "explicit" BOOLEAN NOT NULL
    )
"#;

const DROP_MOVIES: &str = r#"DROP TABLE IF EXISTS "movies""#;

pub async fn migrate_pg(pool: &PgPool) -> Result<(), StoreError> {
    sqlx::query(PG_CREATE_MOVIES).execute(pool).await?;
    Ok(())
}

pub async fn rollback_pg(pool: &PgPool) -> Result<(), StoreError> {
    sqlx::query(DROP_MOVIES).execute(pool).await?;
    Ok(())
}

pub async fn migrate_sqlite(pool: &SqlitePool) -> Result<(), StoreError> {
    sqlx::query(SQLITE_CREATE_MOVIES).execute(pool).await?;
    Ok(())
}

pub async fn rollback_sqlite(pool: &SqlitePool) -> Result<(), StoreError> {
    sqlx::query(DROP_MOVIES).execute(pool).await?;
    Ok(())
}

/// The three movies every fresh test database starts with.
pub fn seed_movies() -> Vec<NewMovie> {
    [
        ("Pulp Fiction", "Crime", 9.0, true),
        ("Titanic", "Drama", 8.0, false),
        ("The Lion King", "Animation", 7.0, false),
    ]
    .into_iter()
    .map(|(name, genre, rating, explicit)| NewMovie {
        name: Some(name.to_string()),
        genre: Some(genre.to_string()),
        rating: Some(rating),
        explicit: Some(explicit),
    })
    .collect()
}

/// Insert the seed movies through the store so both backends share one path.
pub async fn seed(store: &dyn MovieStore) -> Result<usize, StoreError> {
    let movies = seed_movies();
    for movie in &movies {
        store.add_movie(movie).await?;
    }
    tracing::info!(count = movies.len(), "seeded movies");
    Ok(movies.len())
}
