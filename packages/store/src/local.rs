//! # localStorage key/value store — browser-side persistence
//!
//! [`LocalStore`] is the [`KeyValueStore`] implementation used on the **web
//! platform**. It writes straight into `window.localStorage`, optionally
//! namespacing every key with a prefix so several dashboards served from the
//! same origin do not clobber each other's credentials.
//!
//! ## Error handling
//!
//! `localStorage` can be missing (some embedded webviews) or throw on write
//! (quota, private mode). Reads degrade to `None` and writes are dropped with a
//! warning, so the session layer simply sees an anonymous visitor.

use crate::kv::KeyValueStore;

/// `window.localStorage`-backed KeyValueStore.
#[derive(Clone, Debug, Default)]
pub struct LocalStore {
    prefix: String,
}

impl LocalStore {
    /// Create an unprefixed store.
    pub fn new() -> Self {
        Self::with_prefix("")
    }

    /// Create a store whose keys are stored as `"<prefix><key>"`.
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    fn full_key(&self, key: &str) -> String {
        format!("{}{key}", self.prefix)
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(&self.full_key(key)).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, dropping write to {key}");
            return;
        };
        if storage.set_item(&self.full_key(key), value).is_err() {
            tracing::warn!("localStorage rejected write to {key}");
        }
    }

    fn remove(&self, key: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, could not remove {key}");
            return;
        };
        if storage.remove_item(&self.full_key(key)).is_err() {
            tracing::warn!("localStorage rejected removal of {key}");
        }
    }
}
