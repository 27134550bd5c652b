//! # Application State
//!
//! Shared state handed to every route handler.

use crate::digest::TextEncoding;
use crate::store::UserStore;
use std::sync::Arc;

/// Default cap on request bodies, uploads included.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Shared application state passed to all route handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Registered users.
    pub users: Arc<UserStore>,
    /// Encoding used to turn passwords into digest input.
    pub text_encoding: TextEncoding,
    /// Largest accepted request body in bytes.
    pub max_upload_bytes: usize,
}

impl AppState {
    /// Creates the state around an opened user store, with the default upload limit.
    pub fn new(users: UserStore, text_encoding: TextEncoding) -> Self {
        Self {
            users: Arc::new(users),
            text_encoding,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }

    /// Replaces the request body limit applied by the router.
    pub fn with_max_upload_bytes(mut self, max_upload_bytes: usize) -> Self {
        self.max_upload_bytes = max_upload_bytes;
        self
    }
}
