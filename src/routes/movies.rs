//! Movie routes, mounted by the caller under `/api/v1`.

use crate::handlers::movies::{create, delete, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub const MOVIES_PATH: &str = "/movies";

pub fn movie_routes(state: AppState) -> Router {
    Router::new()
        .route(MOVIES_PATH, get(list).post(create))
        .route(&format!("{}/:id", MOVIES_PATH), get(read).put(update).delete(delete))
        .with_state(state)
}
