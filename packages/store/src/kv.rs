//! # Key/value persistence — the durable client-side storage seam
//!
//! Everything the dashboard keeps between page loads (the bearer token and the
//! cached user record) goes through [`KeyValueStore`]. The trait is synchronous
//! because the browser's `localStorage` is synchronous; the same session logic
//! then runs unchanged against [`crate::MemoryStore`] in tests and on native
//! targets, and against [`crate::LocalStore`] in the browser.
//!
//! Implementations never fail loudly: a storage backend that is unavailable
//! (private browsing, quota exceeded) degrades to "nothing stored", which the
//! session layer already treats as an anonymous visitor.

/// Synchronous string key/value storage.
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, overwriting any previous value.
    fn set(&self, key: &str, value: &str);

    /// Remove `key`. Removing a missing key is a no-op.
    fn remove(&self, key: &str);
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::rc::Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}
