//! Platform-specific constructors.
//!
//! - **Web** (WASM + `web` feature): address bar via [`router::BrowserHistory`],
//!   credentials in `localStorage` via [`store::LocalStore`]
//! - **Native** (tests, tooling): [`router::MemoryHistory`] and [`store::MemoryStore`]

use api::{HttpBackend, SessionManager};
use router::HistoryMode;
use store::{DashboardConfig, HistoryModeConfig};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type AppHistory = router::BrowserHistory;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type AppHistory = router::MemoryHistory;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type AppStorage = store::LocalStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type AppStorage = store::MemoryStore;

pub type AppSession = SessionManager<HttpBackend, AppStorage>;

pub fn history_mode(mode: HistoryModeConfig) -> HistoryMode {
    match mode {
        HistoryModeConfig::Path => HistoryMode::Path,
        HistoryModeConfig::Hash => HistoryMode::Hash,
    }
}

/// Create the history the router drives.
pub fn make_history(config: &DashboardConfig) -> AppHistory {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        router::BrowserHistory::new(history_mode(config.router.mode))
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        tracing::debug!(mode = ?history_mode(config.router.mode), "Using in-memory history");
        router::MemoryHistory::new("/")
    }
}

/// Create the credential store, namespaced by the configured prefix.
pub fn make_storage(config: &DashboardConfig) -> AppStorage {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStore::with_prefix(&config.storage.prefix)
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        store::MemoryStore::with_prefix(&config.storage.prefix)
    }
}

pub fn make_session(config: &DashboardConfig) -> AppSession {
    SessionManager::new(HttpBackend::from_config(&config.api), make_storage(config))
}
