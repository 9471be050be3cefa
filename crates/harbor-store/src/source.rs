//! Data source selection: hosted backend or seeded mock data.

use harbor_config::BackendConfig;
use serde::Serialize;

use crate::backend::HostedBackend;
use crate::store::EntityStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreOrigin {
    Hosted,
    Mock,
}

#[derive(Debug)]
pub struct LoadedStore {
    pub store: EntityStore,
    pub origin: StoreOrigin,
}

impl LoadedStore {
    fn mock() -> Self {
        Self {
            store: EntityStore::seeded(),
            origin: StoreOrigin::Mock,
        }
    }
}

/// Load the store from the hosted backend, or from seed data.
///
/// Never fails: a missing configuration or any backend error is logged and the
/// seeded mock store is returned instead.
pub async fn load_store(config: &BackendConfig) -> LoadedStore {
    if !config.is_configured() {
        tracing::warn!("hosted backend is not configured; using mock data");
        return LoadedStore::mock();
    }

    let backend = match HostedBackend::new(config) {
        Ok(backend) => backend,
        Err(error) => {
            tracing::warn!(%error, "failed to build backend client; using mock data");
            return LoadedStore::mock();
        }
    };

    match backend.fetch_snapshot().await {
        Ok(snapshot) => {
            tracing::debug!(
                clients = snapshot.clients.len(),
                team = snapshot.team_members.len(),
                notifications = snapshot.notifications.len(),
                "loaded store from hosted backend"
            );
            LoadedStore {
                store: EntityStore::from_snapshot(snapshot),
                origin: StoreOrigin::Hosted,
            }
        }
        Err(error) => {
            tracing::warn!(%error, "hosted backend unavailable; using mock data");
            LoadedStore::mock()
        }
    }
}
