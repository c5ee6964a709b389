#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use board_core::clock::{ManualClock, SharedClock};
use board_store::models::announcement::NewAnnouncement;
use board_store::seed::seed_announcements;
use board_store::{EntityStore, IdempotencyCache};
use http_body_util::BodyExt;
use tower::ServiceExt;

use board_api::config::ServerConfig;
use board_api::router::build_app_router;
use board_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        seed_announcements: false,
        ..ServerConfig::default()
    }
}

/// State over an empty store driven by a manual clock.
pub fn empty_state() -> (AppState, ManualClock) {
    let clock = ManualClock::default();
    let shared: SharedClock = Arc::new(clock.clone());
    let store = Arc::new(EntityStore::new(Arc::clone(&shared)));
    let idempotency = Arc::new(IdempotencyCache::new(shared));
    (AppState::new(store, idempotency, test_config()), clock)
}

/// State seeded with the two bootstrap announcements (`"1"` and `"2"`).
pub async fn seeded_state() -> AppState {
    let (state, _) = empty_state();
    seed_announcements(&state.store).await;
    state
}

/// Insert an announcement with a fixed id.
pub async fn insert_announcement(state: &AppState, id: &str, title: &str) {
    state
        .store
        .insert_announcement(NewAnnouncement {
            id: Some(id.to_string()),
            title: title.to_string(),
            content: format!("{title} body"),
            author_id: "admin".to_string(),
        })
        .await;
}

/// Build the full application router with all middleware layers.
///
/// Uses the same builder as `main.rs` so integration tests exercise the
/// production middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery).
pub fn build_test_app(state: AppState) -> Router {
    build_app_router(state, &test_config())
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    get_with_headers(app, uri, &[]).await
}

pub async fn get_with_headers(app: Router, uri: &str, headers: &[(&str, &str)]) -> Response {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    send(app, builder.body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    post_json_with_headers(app, uri, body, &[]).await
}

pub async fn post_json_with_headers(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    headers: &[(&str, &str)],
) -> Response {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json");
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    send(app, builder.body(Body::from(body.to_string())).unwrap()).await
}

pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn delete_with_headers(app: Router, uri: &str, headers: &[(&str, &str)]) -> Response {
    let mut builder = Request::builder().method(Method::DELETE).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    send(app, builder.body(Body::empty()).unwrap()).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
