//! `MovieStore` over a PostgreSQL pool.

use super::{parse_movie_id, MovieStore};
use crate::error::StoreError;
use crate::models::{Movie, MovieChanges, NewMovie};
use crate::sql::{self, bind_pg, bind_pg_as, Dialect, QueryBuf};
use async_trait::async_trait;
use sqlx::PgPool;

const DIALECT: Dialect = Dialect::Postgres;

#[derive(Clone)]
pub struct PgMovieStore {
    pool: PgPool,
}

impl PgMovieStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn fetch_movies(&self, q: &QueryBuf) -> Result<Vec<Movie>, StoreError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let query = bind_pg_as(sqlx::query_as::<_, Movie>(&q.sql), &q.params);
        Ok(query.fetch_all(&self.pool).await?)
    }

    async fn execute(&self, q: &QueryBuf) -> Result<u64, StoreError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let result = bind_pg(sqlx::query(&q.sql), &q.params).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl MovieStore for PgMovieStore {
    async fn get_all_movies(&self) -> Result<Vec<Movie>, StoreError> {
        self.fetch_movies(&sql::select_all()).await
    }

    async fn get_single_movie(&self, id: &str) -> Result<Vec<Movie>, StoreError> {
        self.fetch_movies(&sql::select_by_id(DIALECT, id)).await
    }

    async fn add_movie(&self, movie: &NewMovie) -> Result<Vec<Movie>, StoreError> {
        self.fetch_movies(&sql::insert(DIALECT, movie)).await
    }

    async fn edit_movie(&self, id: &str, changes: &MovieChanges) -> Result<u64, StoreError> {
        let q = sql::update(DIALECT, id, changes).ok_or(StoreError::EmptyUpdate)?;
        self.execute(&q).await
    }

    async fn delete_movie(&self, id: &str) -> Result<u64, StoreError> {
        let id = parse_movie_id(id)?;
        self.execute(&sql::delete(DIALECT, id)).await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
