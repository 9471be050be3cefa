//! Versioned response cache.

use std::collections::BTreeMap;
use std::future::Future;

use harbor_config::OfflineConfig;

use crate::error::OfflineError;
use crate::request::{CachedResponse, RequestInfo};
use crate::strategy::{Strategy, classify};

/// Page served to navigations when both network and cache miss.
const OFFLINE_PAGE: &str = "/offline";

/// Where responses come from when the cache does not answer.
pub trait Network {
    fn fetch(
        &self,
        request: &RequestInfo,
    ) -> impl Future<Output = Result<CachedResponse, OfflineError>> + Send;
}

type Entries = BTreeMap<String, CachedResponse>;

/// Named caches, one of which is current.
#[derive(Debug, Clone)]
pub struct OfflineCache {
    prefix: String,
    version: String,
    caches: BTreeMap<String, Entries>,
}

impl OfflineCache {
    #[must_use]
    pub fn new(prefix: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            version: version.into(),
            caches: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn from_config(config: &OfflineConfig) -> Self {
        Self::new(config.cache_prefix.clone(), config.cache_version.clone())
    }

    /// Same storage under a new version, as after a client upgrade.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    #[must_use]
    pub fn cache_name(&self) -> String {
        format!("{}-{}", self.prefix, self.version)
    }

    #[must_use]
    pub fn cache_names(&self) -> Vec<&str> {
        self.caches.keys().map(String::as_str).collect()
    }

    /// Cached response for `key` in the current cache.
    #[must_use]
    pub fn cached(&self, key: &str) -> Option<&CachedResponse> {
        self.caches.get(&self.cache_name())?.get(key)
    }

    fn store(&mut self, key: &str, response: CachedResponse) {
        let name = self.cache_name();
        self.caches
            .entry(name)
            .or_default()
            .insert(key.to_string(), response);
    }

    /// Fetch every precache path into the current cache.
    ///
    /// All-or-nothing: nothing is stored unless every fetch succeeds.
    ///
    /// # Errors
    ///
    /// Returns the first network error, or [`OfflineError::Install`] for a
    /// non-success status.
    pub async fn install<N: Network + Sync>(
        &mut self,
        precache: &[String],
        network: &N,
    ) -> Result<usize, OfflineError> {
        let mut fetched = Entries::new();
        for path in precache {
            let request = RequestInfo::get(path.clone());
            let response = network.fetch(&request).await?;
            if !response.is_success() {
                return Err(OfflineError::Install {
                    path: path.clone(),
                    status: response.status,
                });
            }
            fetched.insert(request.cache_key().to_string(), response);
        }

        let count = fetched.len();
        let name = self.cache_name();
        tracing::info!(cache = %name, count, "precache installed");
        self.caches.entry(name).or_default().extend(fetched);
        Ok(count)
    }

    /// Drop every cache except the current one. Returns the purged names.
    pub fn activate(&mut self) -> Vec<String> {
        let current = self.cache_name();
        let stale: Vec<String> = self
            .caches
            .keys()
            .filter(|name| **name != current)
            .cloned()
            .collect();
        for name in &stale {
            self.caches.remove(name);
            tracing::info!(cache = %name, "purged stale cache");
        }
        stale
    }

    /// Answer `request` using its [`Strategy`].
    ///
    /// # Errors
    ///
    /// - Passthrough and cache-first misses propagate network errors.
    /// - Network-first returns [`OfflineError::Offline`] when the network
    ///   fails and neither the request nor (for navigations) the offline page
    ///   is cached.
    pub async fn handle<N: Network + Sync>(
        &mut self,
        request: &RequestInfo,
        network: &N,
    ) -> Result<CachedResponse, OfflineError> {
        let key = request.cache_key().to_string();
        match classify(request) {
            Strategy::Passthrough => network.fetch(request).await,
            Strategy::CacheFirst => {
                if let Some(hit) = self.cached(&key) {
                    return Ok(hit.clone());
                }
                let response = network.fetch(request).await?;
                if response.is_success() {
                    self.store(&key, response.clone());
                }
                Ok(response)
            }
            Strategy::NetworkFirst => match network.fetch(request).await {
                Ok(response) => {
                    if response.is_success() {
                        self.store(&key, response.clone());
                    }
                    Ok(response)
                }
                Err(error) => {
                    tracing::debug!(path = %request.path, %error, "network failed; trying cache");
                    self.cached(&key)
                        .or_else(|| {
                            request
                                .is_navigation()
                                .then(|| self.cached(OFFLINE_PAGE))
                                .flatten()
                        })
                        .cloned()
                        .ok_or_else(|| OfflineError::Offline {
                            path: request.path.clone(),
                        })
                }
            },
        }
    }
}
