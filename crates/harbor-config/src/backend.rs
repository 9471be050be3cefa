//! Hosted backend (auth/database) configuration.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://api.harbor-backend.example".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Project API key.
    #[serde(default)]
    pub api_key: String,

    /// Project identifier.
    #[serde(default)]
    pub project_id: String,

    /// REST root of the hosted backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            project_id: String::new(),
            base_url: default_base_url(),
        }
    }
}

impl BackendConfig {
    /// Check if the backend config has the minimum required fields.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.project_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        assert!(!BackendConfig::default().is_configured());
    }

    #[test]
    fn configured_when_key_and_project_set() {
        let config = BackendConfig {
            api_key: "key-123".into(),
            project_id: "harbor-prod".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
    }

    #[test]
    fn not_configured_without_project() {
        let config = BackendConfig {
            api_key: "key-123".into(),
            ..Default::default()
        };
        assert!(!config.is_configured());
    }
}
