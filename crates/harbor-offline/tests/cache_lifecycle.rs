//! Install, activate, and fetch handling against a scripted network.

use std::collections::HashMap;
use std::sync::Mutex;

use harbor_config::OfflineConfig;
use harbor_offline::{CachedResponse, Network, OfflineCache, OfflineError, RequestInfo};
use pretty_assertions::assert_eq;

/// Network that serves fixed responses and can be switched off.
#[derive(Default)]
struct ScriptedNetwork {
    responses: HashMap<String, CachedResponse>,
    online: bool,
    calls: Mutex<Vec<String>>,
}

impl ScriptedNetwork {
    fn online() -> Self {
        Self {
            online: true,
            ..Self::default()
        }
    }

    fn serve(mut self, path: &str, status: u16, body: &str) -> Self {
        self.responses.insert(
            path.to_string(),
            CachedResponse {
                status,
                content_type: Some("text/html".into()),
                body: body.as_bytes().to_vec(),
            },
        );
        self
    }

    fn calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Network for ScriptedNetwork {
    async fn fetch(&self, request: &RequestInfo) -> Result<CachedResponse, OfflineError> {
        self.calls.lock().unwrap().push(request.path.clone());
        if !self.online {
            return Err(OfflineError::Network {
                path: request.path.clone(),
                reason: "offline".into(),
            });
        }
        Ok(self
            .responses
            .get(request.cache_key())
            .cloned()
            .unwrap_or(CachedResponse {
                status: 404,
                content_type: None,
                body: Vec::new(),
            }))
    }
}

fn precache() -> Vec<String> {
    vec!["/".into(), "/offline".into(), "/icons/icon-192.png".into()]
}

fn site() -> ScriptedNetwork {
    ScriptedNetwork::online()
        .serve("/", 200, "home")
        .serve("/offline", 200, "you are offline")
        .serve("/icons/icon-192.png", 200, "png")
        .serve("/client/overview", 200, "overview")
        .serve("/api/clients", 200, "[]")
}

#[tokio::test]
async fn install_fills_current_cache() {
    let mut cache = OfflineCache::from_config(&OfflineConfig::default());
    let installed = cache.install(&precache(), &site()).await.unwrap();
    assert_eq!(installed, 3);
    assert_eq!(cache.cache_names(), vec!["harbor-cache-v1"]);
    assert_eq!(cache.cached("/offline").unwrap().body, b"you are offline");
}

#[tokio::test]
async fn failed_install_stores_nothing() {
    let mut cache = OfflineCache::new("harbor-cache", "v1");
    let mut paths = precache();
    paths.push("/missing".into());
    let err = cache.install(&paths, &site()).await.unwrap_err();
    assert!(matches!(err, OfflineError::Install { status: 404, .. }));
    assert!(cache.cache_names().is_empty());
}

#[tokio::test]
async fn activate_purges_previous_versions() {
    let mut cache = OfflineCache::new("harbor-cache", "v1");
    cache.install(&precache(), &site()).await.unwrap();

    let mut cache = cache.with_version("v2");
    cache.install(&precache(), &site()).await.unwrap();
    assert_eq!(cache.cache_names().len(), 2);

    assert_eq!(cache.activate(), vec!["harbor-cache-v1".to_string()]);
    assert_eq!(cache.cache_names(), vec!["harbor-cache-v2"]);
}

#[tokio::test]
async fn cache_first_serves_hits_without_network() {
    let mut cache = OfflineCache::new("harbor-cache", "v1");
    let network = site();
    cache.install(&precache(), &network).await.unwrap();
    let before = network.calls();

    let response = cache
        .handle(&RequestInfo::get("/icons/icon-192.png"), &network)
        .await
        .unwrap();
    assert_eq!(response.body, b"png");
    assert_eq!(network.calls(), before);
}

#[tokio::test]
async fn network_first_falls_back_to_cached_copy() {
    let mut cache = OfflineCache::new("harbor-cache", "v1");
    cache
        .handle(&RequestInfo::get("/api/clients"), &site())
        .await
        .unwrap();

    let offline = ScriptedNetwork::default();
    let response = cache
        .handle(&RequestInfo::get("/api/clients"), &offline)
        .await
        .unwrap();
    assert_eq!(response.body, b"[]");
}

#[tokio::test]
async fn offline_navigation_gets_offline_page() {
    let mut cache = OfflineCache::new("harbor-cache", "v1");
    cache.install(&precache(), &site()).await.unwrap();

    let offline = ScriptedNetwork::default();
    let response = cache
        .handle(&RequestInfo::navigate("/lawyer/leads"), &offline)
        .await
        .unwrap();
    assert_eq!(response.body, b"you are offline");
}

#[tokio::test]
async fn offline_api_miss_is_an_error() {
    let mut cache = OfflineCache::new("harbor-cache", "v1");
    let err = cache
        .handle(&RequestInfo::get("/api/team"), &ScriptedNetwork::default())
        .await
        .unwrap_err();
    assert!(matches!(err, OfflineError::Offline { .. }));
}

#[tokio::test]
async fn passthrough_is_never_cached() {
    let mut cache = OfflineCache::new("harbor-cache", "v1");
    let request = RequestInfo {
        method: "POST".into(),
        ..RequestInfo::get("/api/clients")
    };
    cache.handle(&request, &site()).await.unwrap();
    assert!(cache.cached("/api/clients").is_none());
}
