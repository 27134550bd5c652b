use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One registered user, as stored on a single line of the user file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Unique login name.
    pub username: String,
    /// Lowercase hex SHA-256 digest of the password.
    pub password_hash: String,
    /// When the user registered.
    pub registered: DateTime<Utc>,
}
