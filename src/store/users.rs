use super::types::UserRecord;
use anyhow::{Context, Result as AnyhowResult};
use chrono::Utc;
use log::{debug, info};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// Errors returned when registering a user.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A user with this name already exists.
    #[error("user already exists: {0}")]
    Duplicate(String),

    /// The record could not be appended to the user file.
    #[error("failed to write user file: {0}")]
    Io(#[from] std::io::Error),

    /// The record could not be serialized.
    #[error("failed to serialize user record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Users loaded from, and appended to, a flat file.
///
/// All access goes through one async mutex, which also keeps appends to the file in order.
#[derive(Debug)]
pub struct UserStore {
    path: PathBuf,
    users: Mutex<Users>,
}

#[derive(Debug, Default)]
struct Users {
    records: BTreeMap<String, UserRecord>,
    /// The file ends in a partial line (no trailing newline) that the next append must close.
    needs_newline: bool,
}

impl UserStore {
    /// Opens the user file at `path`, creating it (and its parent directory) if it does not exist.
    ///
    /// # Returns
    ///
    /// * `Ok(UserStore)` - The store with every existing record loaded.
    /// * `Err(anyhow::Error)` - The file could not be created or read, a line is not a valid
    ///   record, or a username appears twice.
    pub async fn open(path: impl AsRef<Path>) -> AnyhowResult<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .context(format!("Failed to create directory {}", parent.display()))?;
        }

        let users = if fs::try_exists(&path)
            .await
            .context(format!("Failed to check for {}", path.display()))?
        {
            let content = fs::read_to_string(&path)
                .await
                .context(format!("Failed to read user file {}", path.display()))?;
            Users {
                records: parse_user_file(&content)
                    .context(format!("Invalid user file {}", path.display()))?,
                needs_newline: !content.is_empty() && !content.ends_with('\n'),
            }
        } else {
            fs::write(&path, b"")
                .await
                .context(format!("Failed to create user file {}", path.display()))?;
            Users::default()
        };

        info!("Loaded {} user(s) from {}", users.records.len(), path.display());
        Ok(Self {
            path,
            users: Mutex::new(users),
        })
    }

    /// Registers a new user and appends the record to the user file.
    ///
    /// The in-memory view only changes once the line has been written.
    pub async fn register(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<UserRecord, StoreError> {
        let mut users = self.users.lock().await;
        if users.records.contains_key(username) {
            return Err(StoreError::Duplicate(username.to_string()));
        }

        let record = UserRecord {
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            registered: Utc::now(),
        };
        let mut line = String::new();
        if users.needs_newline {
            line.push('\n');
        }
        line.push_str(&serde_json::to_string(&record)?);
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        debug!("Appended user {} to {}", username, self.path.display());
        users.needs_newline = false;
        users.records.insert(record.username.clone(), record.clone());
        Ok(record)
    }

    /// Looks up a user by name.
    pub async fn find(&self, username: &str) -> Option<UserRecord> {
        self.users.lock().await.records.get(username).cloned()
    }

    /// Number of registered users.
    pub async fn len(&self) -> usize {
        self.users.lock().await.records.len()
    }

    /// Whether no user has registered yet.
    pub async fn is_empty(&self) -> bool {
        self.users.lock().await.records.is_empty()
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Parses the user file, one JSON record per line. Blank lines are skipped.
fn parse_user_file(content: &str) -> AnyhowResult<BTreeMap<String, UserRecord>> {
    let mut users = BTreeMap::new();
    for (index, line) in content.lines().enumerate() {
        let line_number = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let record: UserRecord = serde_json::from_str(trimmed)
            .context(format!("Malformed record on line {}", line_number))?;
        if users.contains_key(&record.username) {
            return Err(anyhow::anyhow!(
                "Duplicate user {} on line {}",
                record.username,
                line_number
            ));
        }
        users.insert(record.username.clone(), record);
    }
    Ok(users)
}
