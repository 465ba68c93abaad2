//! Root greeting.

use crate::response;
use axum::{http::StatusCode, response::Response};

pub async fn index() -> Response {
    response::success_message(StatusCode::OK, "Hello World!")
}
