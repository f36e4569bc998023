//! File-based session token store
//!
//! Persists the bearer token as a small JSON document so a login survives
//! restarts.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use sc_core::auth::SessionToken;
use sc_core::ports::{SessionStoreError, SessionTokenPort};
use sc_core::ClientConfig;

pub const DEFAULT_SESSION_FILE: &str = ClientConfig::DEFAULT_SESSION_FILE;

#[derive(Serialize, Deserialize)]
struct StoredSession {
    token: SessionToken,
}

pub struct FileSessionTokenStore {
    token_file_path: PathBuf,
}

impl FileSessionTokenStore {
    pub fn new(token_file_path: PathBuf) -> Self {
        Self { token_file_path }
    }

    /// Store under `base_dir` using [`DEFAULT_SESSION_FILE`].
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self {
            token_file_path: base_dir.join(DEFAULT_SESSION_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.token_file_path
    }

    async fn ensure_parent_dir(&self) -> Result<(), SessionStoreError> {
        if let Some(parent) = self.token_file_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl SessionTokenPort for FileSessionTokenStore {
    async fn load(&self) -> Result<Option<SessionToken>, SessionStoreError> {
        let content = match fs::read_to_string(&self.token_file_path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        let stored: StoredSession = serde_json::from_str(&content)
            .map_err(|e| SessionStoreError::Corrupt(format!("Failed to parse session file: {e}")))?;
        Ok(Some(stored.token))
    }

    async fn save(&self, token: &SessionToken) -> Result<(), SessionStoreError> {
        self.ensure_parent_dir().await?;

        let json = serde_json::to_string_pretty(&StoredSession {
            token: token.clone(),
        })
        .map_err(|e| SessionStoreError::Corrupt(format!("Failed to serialize session: {e}")))?;

        let mut file = fs::File::create(&self.token_file_path).await?;
        file.write_all(json.as_bytes()).await?;
        file.sync_all().await?;

        debug!(path = %self.token_file_path.display(), "session token saved");
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionStoreError> {
        match fs::remove_file(&self.token_file_path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
