//! Typed errors for storage, configuration, and server bootstrap.

use crate::response;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sqlx::error::ErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unknown APP_ENV '{0}' (expected 'test' or 'development')")]
    UnknownEnvironment(String),
    #[error("{name} must be a valid {expected}, got '{value}'")]
    InvalidVar {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Errors raised by a [`crate::queries::MovieStore`].
#[derive(Error, Debug)]
pub enum StoreError {
    /// Storage rejected a write (NOT NULL, CHECK, UNIQUE or FK violation).
    #[error("{0}")]
    Constraint(String),
    /// Storage unreachable: I/O, TLS, or pool exhaustion.
    #[error("database unavailable: {0}")]
    Connection(String),
    #[error("invalid movie id '{0}'")]
    InvalidId(String),
    #[error("no fields to update")]
    EmptyUpdate,
    #[error("{0}")]
    Query(String),
}

impl StoreError {
    pub fn is_constraint(&self) -> bool {
        matches!(self, StoreError::Constraint(_))
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, StoreError::Connection(_))
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::Database(db) => match db.kind() {
                ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation
                | ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation => StoreError::Constraint(db.message().to_string()),
                _ => StoreError::Query(db.message().to_string()),
            },
            other @ (sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed) => StoreError::Connection(other.to_string()),
            other => StoreError::Query(other.to_string()),
        }
    }
}

/// Failure answered by a movie route. The variant fixes the status code and
/// the envelope key carrying the message.
#[derive(Error, Debug)]
pub enum ApiError {
    /// 404 `{status: "error", message}`.
    #[error("{0}")]
    NotFound(String),
    /// 400 `{status: "error", message}`.
    #[error("{0}")]
    BadRequest(String),
    /// 404 `{status: "error", data: message}`; only the update route uses it.
    #[error("{0}")]
    UpdateFailed(String),
    /// 500 `{status: "error", message}`.
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(m) => response::error(StatusCode::NOT_FOUND, m),
            ApiError::BadRequest(m) => response::error(StatusCode::BAD_REQUEST, m),
            ApiError::UpdateFailed(m) => response::error_in_data(StatusCode::NOT_FOUND, m),
            ApiError::Internal(m) => response::error(StatusCode::INTERNAL_SERVER_ERROR, m),
        }
    }
}

/// Errors that stop the server from starting.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("invalid DATABASE_URL: {0}")]
    DatabaseUrl(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Store(e.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_timeout_is_a_connection_error() {
        let err: StoreError = sqlx::Error::PoolTimedOut.into();
        assert!(err.is_connection());
        assert!(!err.is_constraint());
    }

    #[test]
    fn row_not_found_is_a_query_error() {
        let err: StoreError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, StoreError::Query(_)));
    }

    #[test]
    fn api_errors_map_to_route_statuses() {
        assert_eq!(ApiError::NotFound("x".into()).into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::BadRequest("x".into()).into_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::UpdateFailed("x".into()).into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal("x".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn invalid_id_message_names_the_id() {
        assert_eq!(StoreError::InvalidId("abc".into()).to_string(), "invalid movie id 'abc'");
    }
}
