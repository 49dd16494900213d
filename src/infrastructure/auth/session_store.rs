//! Session store implementations

use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::session::{Session, SessionStore};
use crate::domain::DomainError;

/// Session kept only for the process lifetime
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    session: Mutex<Option<Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn save(&self, session: &Session) -> Result<(), DomainError> {
        let mut slot = self
            .session
            .lock()
            .map_err(|_| DomainError::internal("Session store lock poisoned"))?;
        *slot = Some(session.clone());
        Ok(())
    }

    async fn load(&self) -> Result<Option<Session>, DomainError> {
        let slot = self
            .session
            .lock()
            .map_err(|_| DomainError::internal("Session store lock poisoned"))?;
        Ok(slot.clone())
    }

    async fn clear(&self) -> Result<(), DomainError> {
        let mut slot = self
            .session
            .lock()
            .map_err(|_| DomainError::internal("Session store lock poisoned"))?;
        *slot = None;
        Ok(())
    }
}

/// Session persisted as a JSON file so it survives restarts, like the
/// original persisted browser state
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn save(&self, session: &Session) -> Result<(), DomainError> {
        let body = serde_json::to_vec_pretty(session)
            .map_err(|e| DomainError::internal(format!("Failed to serialize session: {}", e)))?;

        tokio::fs::write(&self.path, body).await.map_err(|e| {
            DomainError::internal(format!(
                "Failed to write session file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        debug!("Persisted session to {}", self.path.display());
        Ok(())
    }

    async fn load(&self) -> Result<Option<Session>, DomainError> {
        let body = match tokio::fs::read(&self.path).await {
            Ok(body) => body,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(DomainError::internal(format!(
                    "Failed to read session file {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        let session = serde_json::from_slice(&body)
            .map_err(|e| DomainError::internal(format!("Corrupt session file: {}", e)))?;
        Ok(Some(session))
    }

    async fn clear(&self) -> Result<(), DomainError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DomainError::internal(format!(
                "Failed to remove session file {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}
