//! Authenticated session context.
//!
//! A [`Session`] is created once and handed to the [`ApiClient`] at
//! construction. `begin` runs on login, `end` on logout; between the two the
//! client reads the bearer token from here before every request.
//!
//! [`ApiClient`]: crate::api::ApiClient

use std::sync::Arc;

use clinic_dash_core::models::{AuthenticatedUser, Role};
use tokio::sync::RwLock;

use crate::store::{StoreResult, StoredSession, TokenStore};

#[derive(Debug, Clone, Default)]
struct SessionState {
    session_id: Option<String>,
    token: Option<String>,
    user: Option<AuthenticatedUser>,
}

/// Shared handle to the current login.
#[derive(Clone)]
pub struct Session {
    state: Arc<RwLock<SessionState>>,
    store: Arc<dyn TokenStore>,
}

impl Session {
    /// Create an empty session backed by `store`.
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self {
            state: Arc::new(RwLock::new(SessionState::default())),
            store,
        }
    }

    /// Restore a previously persisted login. Returns whether one was found.
    pub async fn restore(&self) -> StoreResult<bool> {
        let Some(saved) = self.store.load()? else {
            return Ok(false);
        };

        tracing::info!(session_id = %saved.session_id, "Restored saved session");
        *self.state.write().await = SessionState {
            session_id: Some(saved.session_id),
            token: Some(saved.token),
            user: saved.user,
        };
        Ok(true)
    }

    /// Start a session after a successful login and persist its token.
    pub async fn begin(&self, token: String, user: Option<AuthenticatedUser>) -> StoreResult<String> {
        let session_id = uuid::Uuid::new_v4().to_string();
        self.store.save(&StoredSession {
            session_id: session_id.clone(),
            token: token.clone(),
            user: user.clone(),
            saved_at: chrono::Utc::now().to_rfc3339(),
        })?;

        *self.state.write().await = SessionState {
            session_id: Some(session_id.clone()),
            token: Some(token),
            user,
        };
        tracing::info!(session_id = %session_id, "Session started");
        Ok(session_id)
    }

    /// End the session and delete the persisted token.
    ///
    /// In-memory state is cleared even if the store fails.
    pub async fn end(&self) -> StoreResult<()> {
        let previous = std::mem::take(&mut *self.state.write().await);
        if let Some(session_id) = previous.session_id {
            tracing::info!(session_id = %session_id, "Session ended");
        }
        self.store.clear()
    }

    /// Token to send as `Authorization: Bearer`.
    pub async fn bearer_token(&self) -> Option<String> {
        self.state.read().await.token.clone()
    }

    pub async fn user(&self) -> Option<AuthenticatedUser> {
        self.state.read().await.user.clone()
    }

    /// Role of the signed-in user, for UI branching only.
    pub async fn role(&self) -> Option<Role> {
        self.state.read().await.user.as_ref().map(|u| u.role)
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.token.is_some()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}
