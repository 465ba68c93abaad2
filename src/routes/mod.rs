//! Router assembly.

mod common;
mod movies;

pub use common::common_routes;
pub use movies::{movie_routes, MOVIES_PATH};

use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::trace::TraceLayer;

pub const API_PREFIX: &str = "/api/v1";

/// Full application: common routes at the root, movies under `/api/v1`,
/// with HTTP tracing. The body limit is enforced by the `Json` extractor, so
/// an oversized body is rejected by the route with its own error envelope.
pub fn app(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest(API_PREFIX, movie_routes(state))
        .layer(DefaultBodyLimit::max(body_limit_bytes))
        .layer(TraceLayer::new_for_http())
}
