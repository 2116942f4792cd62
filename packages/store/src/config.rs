//! # Application configuration — `dashboard.toml`
//!
//! Defines the TOML file that the web crate embeds at build time to locate the
//! backend and choose how the client-side router talks to the address bar.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000/api"   # REST backend root, no trailing slash
//!
//! [router]
//! mode = "path"                            # "path" (pushState) or "hash" (#/route)
//!
//! [storage]
//! prefix = ""                              # prepended to every localStorage key
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`DashboardConfig`] | Top-level config with TOML (de)serialisation and an env override for the API URL. |
//! | [`ApiConfig`] | Backend section — `base_url`. |
//! | [`RouterConfig`] | Router section — [`HistoryModeConfig`]. |
//! | [`StorageConfig`] | Storage section — key `prefix`. |
//!
//! Every section is `#[serde(default)]`, so a missing or empty file is the
//! default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `dashboard.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub router: RouterConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Backend location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// How locations are written to the address bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryModeConfig {
    /// `/hotels?search=x` via the History API.
    #[default]
    Path,
    /// `/#/hotels?search=x`, for static hosts without SPA rewrites.
    Hash,
}

/// Router configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RouterConfig {
    #[serde(default)]
    pub mode: HistoryModeConfig,
}

/// Persistent storage configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub prefix: String,
}

impl DashboardConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "dashboard.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Builder method to override the backend URL. Trailing slashes are dropped.
    pub fn with_api_url(mut self, url: &str) -> Self {
        self.api.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Parse `source`, falling back to defaults on a malformed file, then apply
    /// an optional API URL override (typically a build-time env var).
    pub fn load(source: &str, api_override: Option<&str>) -> Self {
        let config = match Self::from_toml(source) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Invalid {}: {e}; using defaults", Self::filename());
                Self::default()
            }
        };
        match api_override.filter(|url| !url.trim().is_empty()) {
            Some(url) => config.with_api_url(url),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = DashboardConfig::from_toml("").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:8000/api");
        assert_eq!(config.router.mode, HistoryModeConfig::Path);
        assert_eq!(config.storage.prefix, "");
    }

    #[test]
    fn test_parse_sections() {
        let config = DashboardConfig::from_toml(
            r#"
            [api]
            base_url = "https://hotels.example.com/api"

            [router]
            mode = "hash"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://hotels.example.com/api");
        assert_eq!(config.router.mode, HistoryModeConfig::Hash);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = DashboardConfig::default().with_api_url("https://x.test/api/");
        let text = config.to_toml().unwrap();
        assert_eq!(DashboardConfig::from_toml(&text).unwrap(), config);
        assert_eq!(config.api.base_url, "https://x.test/api");
    }

    #[test]
    fn test_load_with_override_and_garbage() {
        let config = DashboardConfig::load("not = [valid", Some("https://override.test/api"));
        assert_eq!(config.api.base_url, "https://override.test/api");
        assert_eq!(config.router.mode, HistoryModeConfig::Path);

        let config = DashboardConfig::load("[router]\nmode = \"hash\"", Some("  "));
        assert_eq!(config.api.base_url, "http://localhost:8000/api");
        assert_eq!(config.router.mode, HistoryModeConfig::Hash);
    }
}
