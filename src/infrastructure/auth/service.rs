//! Mock authentication service
//!
//! Demo-grade auth: one configured password accepts any username. Tokens
//! are opaque timestamped strings, not verified JWTs, and a session lives
//! in the configured store until logout.

use std::sync::Arc;

use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;
use tracing::info;

use crate::domain::session::{Session, SessionStore, SessionUser};
use crate::domain::DomainError;

const TOKEN_SUFFIX_LEN: usize = 9;

#[derive(Debug)]
pub struct AuthService {
    password: String,
    store: Arc<dyn SessionStore>,
}

impl AuthService {
    pub fn new(password: impl Into<String>, store: Arc<dyn SessionStore>) -> Self {
        Self {
            password: password.into(),
            store,
        }
    }

    /// Authenticate with any username and the one accepted password.
    ///
    /// On success a fresh session is minted and saved, replacing any
    /// previous one.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, DomainError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(DomainError::validation("Username is required"));
        }

        if password != self.password {
            return Err(DomainError::credential(format!(
                "Invalid password. Use '{}' to login.",
                self.password
            )));
        }

        let now_millis = Utc::now().timestamp_millis();
        let session = Session {
            token: mint_token(now_millis),
            user: SessionUser {
                id: format!("user_{}", now_millis),
                username: username.to_string(),
                email: format!("{}@example.com", username),
            },
        };

        self.store.save(&session).await?;
        info!("User '{}' logged in", username);
        Ok(session)
    }

    /// Drop the current session, if any
    pub async fn logout(&self) -> Result<(), DomainError> {
        self.store.clear().await?;
        info!("Session cleared");
        Ok(())
    }

    /// The user behind a presented token
    pub async fn current(&self, token: &str) -> Result<SessionUser, DomainError> {
        match self.store.load().await? {
            Some(session) if session.token == token => Ok(session.user),
            _ => Err(DomainError::session("Not authenticated")),
        }
    }

    /// The persisted session, if one exists
    pub async fn session(&self) -> Result<Option<Session>, DomainError> {
        self.store.load().await
    }
}

fn mint_token(now_millis: i64) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_SUFFIX_LEN)
        .map(char::from)
        .collect();

    format!("mock_jwt_{}_{}", now_millis, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::auth::InMemorySessionStore;

    fn service() -> AuthService {
        AuthService::new("test123", Arc::new(InMemorySessionStore::new()))
    }

    #[tokio::test]
    async fn test_login_accepts_any_username_with_the_password() {
        let auth = service();

        let session = auth.login("demo", "test123").await.unwrap();
        assert_eq!(session.user.username, "demo");
        assert_eq!(session.user.email, "demo@example.com");
        assert!(session.user.id.starts_with("user_"));
        assert!(session.token.starts_with("mock_jwt_"));
    }

    #[tokio::test]
    async fn test_login_rejects_wrong_password() {
        let auth = service();

        let err = auth.login("demo", "hunter2").await.unwrap_err();
        assert!(matches!(err, DomainError::Credential { .. }));
        assert!(err.to_string().contains("test123"));
    }

    #[tokio::test]
    async fn test_login_rejects_blank_username() {
        let auth = service();

        let err = auth.login("   ", "test123").await.unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_current_matches_only_the_live_token() {
        let auth = service();
        let session = auth.login("demo", "test123").await.unwrap();

        let user = auth.current(&session.token).await.unwrap();
        assert_eq!(user.username, "demo");

        let err = auth.current("mock_jwt_0_forged").await.unwrap_err();
        assert!(matches!(err, DomainError::Session { .. }));
    }

    #[tokio::test]
    async fn test_logout_clears_the_session() {
        let auth = service();
        let session = auth.login("demo", "test123").await.unwrap();

        auth.logout().await.unwrap();

        assert!(auth.session().await.unwrap().is_none());
        assert!(auth.current(&session.token).await.is_err());
    }

    #[test]
    fn test_token_shape() {
        let token = mint_token(1756000000000);
        let parts: Vec<&str> = token.splitn(3, '_').collect();

        assert_eq!(parts[0], "mock");
        assert!(token.starts_with("mock_jwt_1756000000000_"));
        assert_eq!(token.len(), "mock_jwt_1756000000000_".len() + 9);
    }
}
