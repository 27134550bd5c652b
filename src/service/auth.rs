//! # Registration and Login
//!
//! Both routes take a JSON body `{"username": ..., "password": ...}`. Passwords are never stored;
//! the store keeps the hex SHA-256 of the password, encoded with the configured `TextEncoding`.
//! Login recomputes that digest and compares it with the stored one.

use super::error::AppError;
use super::state::AppState;
use crate::digest::digest_text;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use log::info;
use serde::{Deserialize, Serialize};

/// Username and password as sent by the client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Body of a successful registration or login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl Credentials {
    /// Trims the username and rejects requests with an empty username or password.
    ///
    /// The trimmed name is the one stored and looked up, so `"alice "` and `"alice"` are the same
    /// account. Passwords are used exactly as sent.
    fn normalize(mut self) -> Result<Self, AppError> {
        self.username = self.username.trim().to_string();
        if self.username.is_empty() || self.password.is_empty() {
            return Err(AppError::BadRequest(
                "Username and password are required".to_string(),
            ));
        }
        Ok(self)
    }
}

fn parse_credentials(payload: Result<Json<Credentials>, JsonRejection>) -> Result<Credentials, AppError> {
    let Json(credentials) =
        payload.map_err(|e| AppError::BadRequest(format!("Invalid request body: {}", e.body_text())))?;
    credentials.normalize()
}

/// Handler for `POST /register`.
///
/// # Returns
///
/// * `201` once the user is stored.
/// * `400` for a malformed body or empty fields.
/// * `409` if the username is taken.
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let credentials = parse_credentials(payload)?;
    let password_hash = digest_text(&credentials.password, state.text_encoding);
    state
        .users
        .register(&credentials.username, &password_hash)
        .await?;

    info!("Registered user {}", credentials.username);
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User registered successfully!".to_string(),
        }),
    ))
}

/// Handler for `POST /login`.
///
/// # Returns
///
/// * `200` if the password digest matches the stored one.
/// * `400` for a malformed body or empty fields.
/// * `404` for an unknown username.
/// * `401` for a wrong password.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let credentials = parse_credentials(payload)?;
    let user = state
        .users
        .find(&credentials.username)
        .await
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    if digest_text(&credentials.password, state.text_encoding) != user.password_hash {
        return Err(AppError::Unauthorized("Invalid password".to_string()));
    }

    info!("User {} logged in", credentials.username);
    Ok(Json(MessageResponse {
        message: "Login successful!".to_string(),
    }))
}
