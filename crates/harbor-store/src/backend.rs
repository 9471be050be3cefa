//! Hosted backend client.
//!
//! Reads whole collections from the backend's REST surface:
//! `GET {base_url}/v1/projects/{project_id}/collections/{collection}` with the
//! project key in `x-api-key`. Each collection is a JSON array of records in
//! the same camelCase shape the store serializes.

use std::time::Duration;

use harbor_config::BackendConfig;
use serde::de::DeserializeOwned;

use crate::error::StoreError;
use crate::http::check_collection;
use crate::store::StoreSnapshot;

const API_KEY_HEADER: &str = "x-api-key";

pub struct HostedBackend {
    http: reqwest::Client,
    base_url: String,
    project_id: String,
    api_key: String,
}

impl HostedBackend {
    /// Build a client for a configured backend.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(config: &BackendConfig) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .user_agent("harbor/0.1")
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            project_id: config.project_id.clone(),
            api_key: config.api_key.clone(),
        })
    }

    #[must_use]
    pub fn collection_url(&self, collection: &str) -> String {
        format!(
            "{}/v1/projects/{}/collections/{}",
            self.base_url,
            urlencoding::encode(&self.project_id),
            collection
        )
    }

    /// Fetch every collection. Any failing collection fails the whole snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on transport failure, non-success status, or a
    /// payload that does not parse into the record types.
    pub async fn fetch_snapshot(&self) -> Result<StoreSnapshot, StoreError> {
        let (clients, team_members, notifications) = tokio::try_join!(
            self.fetch_collection("clients"),
            self.fetch_collection("team"),
            self.fetch_collection("notifications"),
        )?;
        Ok(StoreSnapshot {
            clients,
            team_members,
            notifications,
        })
    }

    async fn fetch_collection<T: DeserializeOwned>(
        &self,
        collection: &str,
    ) -> Result<Vec<T>, StoreError> {
        let resp = self
            .http
            .get(self.collection_url(collection))
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;
        let resp = check_collection(resp, collection).await?;
        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| StoreError::Parse(format!("{collection}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_url_encodes_project() {
        let backend = HostedBackend::new(&BackendConfig {
            api_key: "k".into(),
            project_id: "harbor prod".into(),
            base_url: "http://localhost:8787/".into(),
        })
        .unwrap();
        assert_eq!(
            backend.collection_url("clients"),
            "http://localhost:8787/v1/projects/harbor%20prod/collections/clients"
        );
    }
}
