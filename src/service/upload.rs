//! # File Upload
//!
//! `POST /upload` accepts a multipart form with a `file` field and an optional `isAttacked` text
//! field, and answers with the SHA-256 of the uploaded bytes.

use super::error::AppError;
use crate::digest::digest_hex;
use axum::extract::multipart::MultipartRejection;
use axum::extract::Multipart;
use axum::Json;
use log::info;
use serde::{Deserialize, Serialize};

/// Bytes appended to the upload before hashing when attack simulation is on.
pub const ATTACK_MARKER: &[u8] = b"\n#ATTACKED#";

/// Body of a successful upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    pub hash: String,
}

/// Hashes an uploaded file, optionally tampered with first.
///
/// Only the exact text `true` in `isAttacked` turns attack simulation on; in that mode
/// `ATTACK_MARKER` is appended to the file contents so the returned hash no longer matches the
/// original file.
pub fn hash_upload(contents: &[u8], is_attacked: bool) -> String {
    if is_attacked {
        let mut tampered = Vec::with_capacity(contents.len() + ATTACK_MARKER.len());
        tampered.extend_from_slice(contents);
        tampered.extend_from_slice(ATTACK_MARKER);
        digest_hex(&tampered)
    } else {
        digest_hex(contents)
    }
}

/// Handler for `POST /upload`.
///
/// # Returns
///
/// * `200` with `{"message", "hash"}` once the file is hashed.
/// * `400` if the request is not a multipart form, has no `file` field, or cannot be read.
/// * `413` if the body exceeds the configured limit.
pub async fn upload_file(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, AppError> {
    let mut multipart = multipart
        .map_err(|e| AppError::BadRequest(format!("Error reading file: {}", e.body_text())))?;
    let mut contents = None;
    let mut file_name = None;
    let mut is_attacked = false;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                file_name = field.file_name().map(str::to_string);
                contents = Some(field.bytes().await?);
            }
            "isAttacked" => is_attacked = field.text().await? == "true",
            _ => {}
        }
    }

    let contents = contents.ok_or_else(|| AppError::BadRequest("No file uploaded".to_string()))?;
    let hash = hash_upload(&contents, is_attacked);
    info!(
        "Hashed upload {} ({} bytes, attack simulation: {})",
        file_name.as_deref().unwrap_or("<unnamed>"),
        contents.len(),
        is_attacked
    );

    Ok(Json(UploadResponse {
        message: "File uploaded and hashed successfully!".to_string(),
        hash,
    }))
}
