//! Session and authorization context
//!
//! Single source of truth for "who is logged in". Holds the in-memory
//! identity derived from the persisted token and mediates every
//! session-mutating operation. Only the token survives across processes;
//! the identity is rebuilt by hydration on each start.

use crate::api::auth::{AuthService, LoginCredentials, RegisterData};
use crate::api::models::{AuthResponse, User, UserRole};
use crate::client::{ApiClient, TokenStore};
use crate::error::{Error, Result};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Lifecycle of the in-memory identity
#[derive(Debug, Clone)]
pub enum SessionState {
    /// Persisted token not yet reconciled with the backend
    Hydrating,
    Anonymous,
    Authenticated(User),
}

/// Process-wide session owner
///
/// Session-mutating operations (hydrate, login, register, logout, refresh)
/// are serialized through an internal mutex, so overlapping calls observe
/// a defined order instead of racing on the token store.
pub struct SessionManager {
    auth: AuthService,
    tokens: Arc<dyn TokenStore>,
    state: RwLock<SessionState>,
    write_gate: Mutex<()>,
}

impl SessionManager {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            tokens: client.tokens().clone(),
            auth: AuthService::new(client),
            state: RwLock::new(SessionState::Hydrating),
            write_gate: Mutex::new(()),
        }
    }

    /// Rebuild session state from the persisted token.
    ///
    /// Runs the real transition once; later calls are no-ops. A token the
    /// backend rejects is cleared and the session lands anonymous without
    /// raising: an invalid stored token is a normal unauthenticated start.
    pub async fn hydrate(&self) {
        let _gate = self.write_gate.lock().await;
        if !matches!(*self.state.read().await, SessionState::Hydrating) {
            return;
        }

        let next = match self.tokens.get() {
            None => SessionState::Anonymous,
            Some(_) => match self.auth.profile().await {
                Ok(user) => SessionState::Authenticated(user),
                Err(e) => {
                    tracing::debug!(error = %e, "stored token rejected, clearing it");
                    self.clear_token();
                    SessionState::Anonymous
                }
            },
        };

        *self.state.write().await = next;
    }

    /// Authenticate. The token is persisted before the follow-up profile
    /// fetch; if that secondary fetch fails the identity embedded in the
    /// login response is used instead, so a successful login never leaves
    /// the session without an identity.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse> {
        let _gate = self.write_gate.lock().await;
        let response = self.auth.login(credentials).await?;
        let user = self.profile_or(&response).await;
        *self.state.write().await = SessionState::Authenticated(user);
        Ok(response)
    }

    /// Create an account; same shape as [`login`](Self::login)
    pub async fn register(&self, data: &RegisterData) -> Result<AuthResponse> {
        let _gate = self.write_gate.lock().await;
        let response = self.auth.register(data).await?;
        let user = self.profile_or(&response).await;
        *self.state.write().await = SessionState::Authenticated(user);
        Ok(response)
    }

    /// End the session. Server-side invalidation is best-effort: the local
    /// token and identity are cleared even when the server call fails, and
    /// logging out while anonymous is a no-op rather than an error.
    pub async fn logout(&self) {
        let _gate = self.write_gate.lock().await;
        if let Err(e) = self.auth.logout().await {
            tracing::warn!(error = %e, "server logout failed, clearing local session anyway");
        }
        *self.state.write().await = SessionState::Anonymous;
    }

    /// Reconcile the local identity with the server. Failure invalidates
    /// the session: identity and token are cleared before the error is
    /// handed back.
    pub async fn refresh(&self) -> Result<User> {
        let _gate = self.write_gate.lock().await;
        match self.auth.profile().await {
            Ok(user) => {
                *self.state.write().await = SessionState::Authenticated(user.clone());
                Ok(user)
            }
            Err(e) => {
                self.clear_token();
                *self.state.write().await = SessionState::Anonymous;
                Err(e)
            }
        }
    }

    pub async fn state(&self) -> SessionState {
        self.state.read().await.clone()
    }

    pub async fn current_user(&self) -> Option<User> {
        match &*self.state.read().await {
            SessionState::Authenticated(user) => Some(user.clone()),
            _ => None,
        }
    }

    /// True exactly when an identity is present
    pub async fn is_authenticated(&self) -> bool {
        matches!(*self.state.read().await, SessionState::Authenticated(_))
    }

    /// True until startup hydration has completed
    pub async fn is_loading(&self) -> bool {
        matches!(*self.state.read().await, SessionState::Hydrating)
    }

    /// Gate for views requiring exactly one role
    pub async fn require_role(&self, required: UserRole) -> Result<User> {
        match self.current_user().await {
            None => Err(Error::NotAuthenticated),
            Some(user) if user.role == required => Ok(user),
            Some(_) => Err(Error::Forbidden(required.to_string())),
        }
    }

    /// Gate for views open to any of an allowed set of roles
    pub async fn require_any(&self, allowed: &[UserRole]) -> Result<User> {
        match self.current_user().await {
            None => Err(Error::NotAuthenticated),
            Some(user) if allowed.contains(&user.role) => Ok(user),
            Some(_) => {
                let wanted = allowed
                    .iter()
                    .map(UserRole::to_string)
                    .collect::<Vec<_>>()
                    .join(" or ");
                Err(Error::Forbidden(wanted))
            }
        }
    }

    async fn profile_or(&self, response: &AuthResponse) -> User {
        match self.auth.profile().await {
            Ok(user) => user,
            Err(e) => {
                tracing::debug!(error = %e, "profile fetch after auth failed, using embedded user");
                response.user.clone()
            }
        }
    }

    fn clear_token(&self) {
        if let Err(e) = self.tokens.remove() {
            tracing::warn!(error = %e, "failed to remove persisted token");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Profile;
    use crate::client::MemoryTokenStore;
    use crate::config::ApiConfig;

    fn manager() -> SessionManager {
        let tokens: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::new());
        let client = ApiClient::new(&ApiConfig::default(), tokens).unwrap();
        SessionManager::new(Arc::new(client))
    }

    fn test_user(role: UserRole) -> User {
        User {
            id: "u1".to_string(),
            email: "a@b.com".to_string(),
            role,
            profile_data: Profile {
                name: "Ada".to_string(),
                ..Default::default()
            },
            created_at: chrono::Utc::now(),
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn test_starts_hydrating() {
        let manager = manager();
        assert!(manager.is_loading().await);
        assert!(!manager.is_authenticated().await);
        assert!(manager.current_user().await.is_none());
    }

    #[tokio::test]
    async fn test_hydrate_without_token_is_anonymous() {
        let manager = manager();
        manager.hydrate().await;
        assert!(!manager.is_loading().await);
        assert!(!manager.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_hydrate_runs_once() {
        let manager = manager();
        manager.hydrate().await;
        // A token appearing later must not re-trigger hydration
        manager.tokens.set("late-token").unwrap();
        manager.hydrate().await;
        assert!(!manager.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_require_role_matches() {
        let manager = manager();
        *manager.state.write().await = SessionState::Authenticated(test_user(UserRole::Admin));

        assert!(manager.require_role(UserRole::Admin).await.is_ok());
        assert!(matches!(
            manager.require_role(UserRole::Instructor).await,
            Err(Error::Forbidden(_))
        ));
    }

    #[tokio::test]
    async fn test_require_role_anonymous() {
        let manager = manager();
        *manager.state.write().await = SessionState::Anonymous;

        assert!(matches!(
            manager.require_role(UserRole::Admin).await,
            Err(Error::NotAuthenticated)
        ));
    }

    #[tokio::test]
    async fn test_require_any() {
        let manager = manager();
        *manager.state.write().await = SessionState::Authenticated(test_user(UserRole::Instructor));

        assert!(manager
            .require_any(&[UserRole::Instructor, UserRole::Admin])
            .await
            .is_ok());
        assert!(manager.require_any(&[UserRole::Admin]).await.is_err());
    }
}
