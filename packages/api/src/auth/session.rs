//! # Session lifecycle
//!
//! ```text
//! loading=true, user=None
//!     │ initialize()
//!     ├── no token ───────────────▶ loading=false, user=None      (no request)
//!     ├── GET /user ok ───────────▶ loading=false, user=Some
//!     └── GET /user failed ───────▶ loading=false, user=None      (vault cleared)
//!
//! login()/register() ok ──────────▶ loading=false, user=Some      (vault written)
//! logout() ───────────────────────▶ user=None                     (vault cleared)
//! ```
//!
//! [`SessionManager`] is single-threaded: state sits in a `RefCell` and no
//! borrow is held across an `.await`.

use std::cell::{Cell, Ref, RefCell};

use store::KeyValueStore;

use crate::auth::CredentialVault;
use crate::backend::Backend;
use crate::error::ApiError;
use crate::models::{LoginRequest, RegisterRequest, User};

/// The viewer's session as seen by guards and screens.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

pub struct SessionManager<B, S> {
    backend: B,
    vault: CredentialVault<S>,
    state: RefCell<SessionState>,
    initialized: Cell<bool>,
}

impl<B: Backend, S: KeyValueStore> SessionManager<B, S> {
    pub fn new(backend: B, store: S) -> Self {
        Self {
            backend,
            vault: CredentialVault::new(store),
            state: RefCell::new(SessionState::default()),
            initialized: Cell::new(false),
        }
    }

    pub fn state(&self) -> Ref<'_, SessionState> {
        self.state.borrow()
    }

    /// Snapshot of the current state.
    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.vault.token()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn vault(&self) -> &CredentialVault<S> {
        &self.vault
    }

    /// Restore the session from the persisted credential. Runs at most once;
    /// later calls return the current state without touching the network.
    pub async fn initialize(&self) -> SessionState {
        if self.initialized.replace(true) {
            return self.snapshot();
        }

        let user = match self.vault.token() {
            None => {
                tracing::debug!("No stored credential, starting anonymous");
                None
            }
            Some(token) => match self.backend.who_am_i(&token).await {
                Ok(user) => {
                    tracing::info!(user_id = user.id, "Session restored");
                    self.vault.save(&token, &user);
                    Some(user)
                }
                Err(e) => {
                    tracing::warn!("Stored credential rejected: {e}");
                    self.vault.clear();
                    None
                }
            },
        };

        self.set(SessionState {
            user,
            loading: false,
        })
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let request = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let payload = self.backend.login(&request).await?;
        tracing::info!(user_id = payload.user.id, "Logged in");
        self.establish(&payload.token, payload.user)
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<User, ApiError> {
        let payload = self
            .backend
            .register(&RegisterRequest::new(name, email, password))
            .await?;
        tracing::info!(user_id = payload.user.id, "Registered");
        self.establish(&payload.token, payload.user)
    }

    /// Sign out. The backend call is best-effort; local state is always cleared.
    pub async fn logout(&self) {
        if let Some(token) = self.vault.token() {
            if let Err(e) = self.backend.logout(&token).await {
                tracing::warn!("Logout request failed: {e}");
            }
        }
        self.invalidate();
    }

    /// Drop the credential and the user without contacting the backend, e.g.
    /// after a request was refused as unauthorized.
    pub fn invalidate(&self) {
        self.vault.clear();
        self.state.borrow_mut().user = None;
    }

    fn establish(&self, token: &str, user: User) -> Result<User, ApiError> {
        self.vault.save(token, &user);
        self.set(SessionState {
            user: Some(user.clone()),
            loading: false,
        });
        Ok(user)
    }

    fn set(&self, state: SessionState) -> SessionState {
        *self.state.borrow_mut() = state.clone();
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakeBackend;
    use crate::models::{AuthPayload, Role};
    use store::MemoryStore;

    fn user(role: Role) -> User {
        User {
            id: 3,
            name: "Fatou Sow".into(),
            email: "fatou@red.com".into(),
            role,
            avatar: None,
            created_at: None,
        }
    }

    fn payload() -> AuthPayload {
        AuthPayload {
            user: user(Role::User),
            token: "tok-new".into(),
        }
    }

    fn stored(token: &str) -> MemoryStore {
        let store = MemoryStore::new();
        CredentialVault::new(store.clone()).save(token, &user(Role::User));
        store
    }

    #[tokio::test]
    async fn test_initialize_without_credential_makes_no_request() {
        let session = SessionManager::new(FakeBackend::default(), MemoryStore::new());
        assert!(session.state().loading);

        let state = session.initialize().await;
        assert_eq!(
            state,
            SessionState {
                user: None,
                loading: false
            }
        );
        assert!(session.backend().calls().is_empty());
    }

    #[tokio::test]
    async fn test_initialize_restores_user() {
        let backend = FakeBackend {
            who_am_i: Some(Ok(user(Role::Admin))),
            ..Default::default()
        };
        let store = stored("tok-old");
        let session = SessionManager::new(backend, store.clone());

        let state = session.initialize().await;
        assert!(!state.loading);
        assert_eq!(state.user, Some(user(Role::Admin)));
        // The cache is refreshed with the server's copy.
        assert_eq!(
            CredentialVault::new(store).cached_user(),
            Some(user(Role::Admin))
        );
    }

    #[tokio::test]
    async fn test_initialize_failure_clears_credential() {
        let backend = FakeBackend {
            who_am_i: Some(Err(ApiError::Rejected {
                status: 401,
                message: "Unauthenticated.".into(),
            })),
            ..Default::default()
        };
        let store = stored("tok-expired");
        let session = SessionManager::new(backend, store.clone());

        let state = session.initialize().await;
        assert!(!state.loading);
        assert!(state.user.is_none());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_initialize_runs_once() {
        let backend = FakeBackend {
            who_am_i: Some(Ok(user(Role::User))),
            ..Default::default()
        };
        let session = SessionManager::new(backend, stored("tok"));

        session.initialize().await;
        session.initialize().await;
        assert_eq!(session.backend().calls(), vec!["who_am_i"]);
    }

    #[tokio::test]
    async fn test_login_success_persists_credential() {
        let backend = FakeBackend {
            login: Some(Ok(payload())),
            ..Default::default()
        };
        let store = MemoryStore::new();
        let session = SessionManager::new(backend, store.clone());

        let logged_in = session.login("fatou@red.com", "secret").await.unwrap();
        assert_eq!(logged_in, user(Role::User));
        assert_eq!(session.state().user, Some(user(Role::User)));
        assert!(!session.state().loading);
        assert_eq!(session.token().as_deref(), Some("tok-new"));
        assert_eq!(
            CredentialVault::new(store).cached_user(),
            Some(user(Role::User))
        );
    }

    #[tokio::test]
    async fn test_login_failure_leaves_session_unchanged() {
        let backend = FakeBackend {
            login: Some(Err(ApiError::Rejected {
                status: 401,
                message: "Invalid credentials".into(),
            })),
            ..Default::default()
        };
        let store = MemoryStore::new();
        let session = SessionManager::new(backend, store.clone());
        session.initialize().await;
        let before = session.snapshot();

        let err = session.login("fatou@red.com", "wrong").await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid credentials");
        assert_eq!(session.snapshot(), before);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_register_success() {
        let backend = FakeBackend {
            register: Some(Ok(payload())),
            ..Default::default()
        };
        let session = SessionManager::new(backend, MemoryStore::new());

        session
            .register("Fatou Sow", "fatou@red.com", "secret123")
            .await
            .unwrap();
        assert!(session.state().is_authenticated());
        assert_eq!(session.token().as_deref(), Some("tok-new"));
    }

    #[tokio::test]
    async fn test_register_validation_error_propagates() {
        let backend = FakeBackend {
            register: Some(Err(ApiError::Validation(
                "The email has already been taken.".into(),
            ))),
            ..Default::default()
        };
        let session = SessionManager::new(backend, MemoryStore::new());

        let err = session
            .register("Fatou Sow", "fatou@red.com", "secret123")
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::Validation("The email has already been taken.".into()));
        assert!(session.state().user.is_none());
    }

    #[tokio::test]
    async fn test_logout_clears_even_when_backend_fails() {
        let backend = FakeBackend {
            login: Some(Ok(payload())),
            logout: Some(Err(ApiError::Server { status: 500 })),
            ..Default::default()
        };
        let store = MemoryStore::new();
        let session = SessionManager::new(backend, store.clone());
        session.login("fatou@red.com", "secret").await.unwrap();

        session.logout().await;
        assert!(session.state().user.is_none());
        assert!(store.is_empty());
        assert_eq!(session.backend().calls(), vec!["login", "logout"]);
    }

    #[tokio::test]
    async fn test_logout_without_token_skips_backend() {
        let session = SessionManager::new(FakeBackend::default(), MemoryStore::new());
        session.logout().await;
        assert!(session.backend().calls().is_empty());
        assert!(session.state().user.is_none());
    }
}
