// HTTP test helpers: an in-memory app state and a one-shot request runner.

use crate::modules::employees::core::events::EmployeeEvent;
use crate::shared::core::primitives::FixedClock;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shell::state::AppState;
use crate::tests::fixtures::events::stamp;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

pub fn test_state() -> AppState {
    AppState::in_memory("employees-test", Arc::new(FixedClock(stamp(10))))
}

pub async fn seeded_state(events: &[EmployeeEvent]) -> AppState {
    let state = test_state();
    for event in events {
        state.event_store.append(event).await.unwrap();
    }
    state
}

pub fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}
