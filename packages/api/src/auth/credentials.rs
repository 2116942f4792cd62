use store::KeyValueStore;

use crate::models::User;

/// Storage key of the bearer token.
pub const TOKEN_KEY: &str = "auth_token";
/// Storage key of the JSON-encoded user record.
pub const USER_KEY: &str = "auth_user";

/// Persisted credential: an opaque token plus a cached copy of its user.
#[derive(Clone, Debug)]
pub struct CredentialVault<S> {
    store: S,
}

impl<S: KeyValueStore> CredentialVault<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// The cached user, if present and still readable.
    pub fn cached_user(&self) -> Option<User> {
        let raw = self.store.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("Ignoring unreadable cached user: {e}");
                None
            }
        }
    }

    pub fn save(&self, token: &str, user: &User) {
        self.store.set(TOKEN_KEY, token);
        match serde_json::to_string(user) {
            Ok(json) => self.store.set(USER_KEY, &json),
            Err(e) => tracing::warn!("Failed to cache user: {e}"),
        }
    }

    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
