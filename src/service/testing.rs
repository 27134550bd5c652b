use super::AppState;
use crate::digest::TextEncoding;
use crate::store::UserStore;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

/// Fresh state backed by a user file in a temporary directory. Keep the directory alive for the
/// duration of the test.
pub async fn test_state() -> (TempDir, AppState) {
    let dir = tempfile::tempdir().unwrap();
    let users = UserStore::open(dir.path().join("users.jsonl")).await.unwrap();
    (dir, AppState::new(users, TextEncoding::Latin1))
}

/// Sends one request and returns the status with the body parsed as JSON (`Null` if it is not).
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

pub fn json_request(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
