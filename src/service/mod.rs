//! # HTTP Service
//!
//! Axum application exposing the digest engine and the user store over HTTP.
//!
//! ## Routes
//!
//! - `POST /upload` - Multipart upload; returns the SHA-256 of the `file` field.
//! - `POST /register` - JSON `{username, password}`; stores the password digest.
//! - `POST /login` - JSON `{username, password}`; checks the password digest.
//! - `GET  /health` - Liveness probe.
//!
//! All routes allow any origin (permissive CORS) and share one request body limit.

pub mod auth;
pub mod error;
pub mod state;
pub mod upload;

#[cfg(test)]
mod testing;

pub use error::AppError;
pub use state::AppState;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/upload", post(upload::upload_file))
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/health", get(health))
        .layer(DefaultBodyLimit::max(state.max_upload_bytes))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
