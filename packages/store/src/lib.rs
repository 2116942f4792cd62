pub mod config;
pub mod kv;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use config::{ApiConfig, DashboardConfig, HistoryModeConfig, RouterConfig, StorageConfig};
pub use kv::KeyValueStore;
