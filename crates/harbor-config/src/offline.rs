//! Offline cache configuration.

use serde::{Deserialize, Serialize};

fn default_cache_prefix() -> String {
    "harbor-cache".to_string()
}

fn default_cache_version() -> String {
    "v1".to_string()
}

fn default_precache() -> Vec<String> {
    [
        "/",
        "/login",
        "/offline",
        "/manifest.json",
        "/icons/icon-192.png",
        "/icons/icon-512.png",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OfflineConfig {
    #[serde(default = "default_cache_prefix")]
    pub cache_prefix: String,

    /// Bumping the version purges every older cache on activation.
    #[serde(default = "default_cache_version")]
    pub cache_version: String,

    /// Routes and assets fetched into the cache on install.
    #[serde(default = "default_precache")]
    pub precache: Vec<String>,
}

impl Default for OfflineConfig {
    fn default() -> Self {
        Self {
            cache_prefix: default_cache_prefix(),
            cache_version: default_cache_version(),
            precache: default_precache(),
        }
    }
}

impl OfflineConfig {
    /// Name of the cache owned by this version.
    #[must_use]
    pub fn cache_name(&self) -> String {
        format!("{}-{}", self.cache_prefix, self.cache_version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_name_joins_prefix_and_version() {
        assert_eq!(OfflineConfig::default().cache_name(), "harbor-cache-v1");
    }

    #[test]
    fn precache_includes_shell_routes() {
        let config = OfflineConfig::default();
        assert!(config.precache.iter().any(|p| p == "/"));
        assert!(config.precache.iter().any(|p| p == "/login"));
    }
}
