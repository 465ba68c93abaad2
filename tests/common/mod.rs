#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use movies_api::{app, AppState, Database, DatabaseConfig, Environment};
use tower::ServiceExt;

/// Fresh in-memory database: rolled back, migrated, and seeded with three movies.
pub async fn seeded_database() -> Database {
    let db = Database::connect(&DatabaseConfig::for_environment(Environment::Test))
        .await
        .expect("connect sqlite");
    db.rollback().await.expect("rollback");
    db.migrate_latest().await.expect("migrate");
    db.seed().await.expect("seed");
    db
}

/// Full router over `db`, with the same layers production uses.
pub fn build_test_app(db: &Database) -> Router {
    app(AppState::new(db.store()), 1024 * 1024)
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.expect("router is infallible")
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(
        app,
        Request::builder().method(Method::DELETE).uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::PUT, uri, body).await
}

async fn send_json(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub fn content_type(response: &Response) -> &str {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
