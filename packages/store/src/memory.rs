use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::kv::KeyValueStore;

/// In-memory KeyValueStore for testing and native fallback.
///
/// Clones share the same underlying map, so a test can hand one clone to the
/// code under test and inspect the other.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    prefix: String,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose keys are namespaced with `prefix`.
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            entries: Arc::default(),
            prefix: prefix.to_string(),
        }
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map only means another test thread panicked mid-write;
        // the data is still a plain map.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn full_key(&self, key: &str) -> String {
        format!("{}{key}", self.prefix)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.lock().get(&self.full_key(key)).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.lock().insert(self.full_key(key), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.lock().remove(&self.full_key(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();

        assert!(store.get("auth_token").is_none());

        store.set("auth_token", "abc");
        assert_eq!(store.get("auth_token").as_deref(), Some("abc"));

        store.set("auth_token", "def");
        assert_eq!(store.get("auth_token").as_deref(), Some("def"));
        assert_eq!(store.len(), 1);

        store.remove("auth_token");
        assert!(store.get("auth_token").is_none());
        assert!(store.is_empty());

        // Removing twice is fine
        store.remove("auth_token");
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set("auth_user", "{}");
        assert_eq!(other.get("auth_user").as_deref(), Some("{}"));
    }

    #[test]
    fn test_prefix_isolates_keys() {
        let store = MemoryStore::with_prefix("red.");
        store.set("auth_token", "abc");

        assert_eq!(store.get("auth_token").as_deref(), Some("abc"));
        assert!(store.lock().contains_key("red.auth_token"));
    }
}
