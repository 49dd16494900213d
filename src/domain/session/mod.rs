//! Session types and the persisted-session store trait

use std::fmt::Debug;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// User record synthesized at login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub username: String,
    pub email: String,
}

/// An authenticated session: opaque token plus its user.
///
/// No expiry is enforced on a persisted session; it lives until logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

/// Single-slot persisted session storage.
///
/// Mirrors the two key-value entries of the original persisted state:
/// token and serialized user. Both present means authenticated; `clear`
/// removes both.
#[async_trait]
pub trait SessionStore: Send + Sync + Debug {
    async fn save(&self, session: &Session) -> Result<(), DomainError>;

    async fn load(&self) -> Result<Option<Session>, DomainError>;

    async fn clear(&self) -> Result<(), DomainError>;
}
