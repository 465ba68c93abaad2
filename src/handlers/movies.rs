//! Movie handlers: list, read, create, update, delete.
//!
//! Every handler catches its own errors and answers with an envelope; the
//! failure status per route is fixed (read/update/delete 404, create 400).

use crate::error::{ApiError, StoreError};
use crate::models::{MovieChanges, NewMovie};
use crate::response;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Response,
    Json,
};

pub const MOVIE_NOT_FOUND: &str = "Movie does not exist";
pub const ADD_FAILED: &str = "Error adding movie";
pub const UPDATE_FAILED: &str = "There was an error updating a movie";
pub const DELETE_FAILED: &str = "There was an error deleting this movie";

fn log_store_error(route: &'static str, err: &StoreError) {
    if err.is_connection() {
        tracing::error!(route, error = %err, "database unavailable");
    } else if err.is_constraint() {
        tracing::warn!(route, error = %err, "constraint violation");
    } else if matches!(err, StoreError::Query(_)) {
        tracing::error!(route, error = %err, "query failed");
    } else {
        tracing::warn!(route, error = %err, "request rejected");
    }
}

fn log_rejection(route: &'static str, rejection: &JsonRejection) -> String {
    let text = rejection.body_text();
    tracing::warn!(route, status = %rejection.status(), error = %text, "invalid body");
    text
}

pub async fn list(State(state): State<AppState>) -> Result<Response, ApiError> {
    let movies = state.store.get_all_movies().await.map_err(|e| {
        log_store_error("list", &e);
        ApiError::Internal(e.to_string())
    })?;
    Ok(response::success(StatusCode::OK, movies))
}

pub async fn read(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response, ApiError> {
    let movies = state.store.get_single_movie(&id).await.map_err(|e| {
        log_store_error("read", &e);
        ApiError::NotFound(message_or(e, MOVIE_NOT_FOUND))
    })?;
    if movies.is_empty() {
        return Err(ApiError::NotFound(MOVIE_NOT_FOUND.into()));
    }
    Ok(response::success(StatusCode::OK, movies))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewMovie>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(movie) = body.map_err(|r| ApiError::BadRequest(non_empty_or(log_rejection("create", &r), ADD_FAILED)))?;
    let added = state.store.add_movie(&movie).await.map_err(|e| {
        log_store_error("create", &e);
        ApiError::BadRequest(message_or(e, ADD_FAILED))
    })?;
    if added.is_empty() {
        return Err(ApiError::BadRequest(ADD_FAILED.into()));
    }
    Ok(response::success(StatusCode::CREATED, added))
}

/// Success carries whatever storage reported (the affected-row count, 0
/// included), not the updated row. Failures put their message under `data`.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<MovieChanges>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(changes) =
        body.map_err(|r| ApiError::UpdateFailed(non_empty_or(log_rejection("update", &r), UPDATE_FAILED)))?;
    let affected = state.store.edit_movie(&id, &changes).await.map_err(|e| {
        log_store_error("update", &e);
        ApiError::UpdateFailed(message_or(e, UPDATE_FAILED))
    })?;
    Ok(response::success(StatusCode::OK, affected))
}

/// Any failure, including zero rows deleted, answers with the same message.
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response, ApiError> {
    let affected = state.store.delete_movie(&id).await.map_err(|e| {
        log_store_error("delete", &e);
        ApiError::NotFound(DELETE_FAILED.into())
    })?;
    if affected == 0 {
        tracing::warn!(route = "delete", id = %id, "no movie deleted");
        return Err(ApiError::NotFound(DELETE_FAILED.into()));
    }
    Ok(response::success(StatusCode::OK, affected))
}

fn message_or(err: StoreError, default: &str) -> String {
    non_empty_or(err.to_string(), default)
}

fn non_empty_or(message: String, default: &str) -> String {
    if message.trim().is_empty() {
        default.to_string()
    } else {
        message
    }
}
