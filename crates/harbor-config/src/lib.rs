//! # harbor-config
//!
//! Layered configuration loading for Harbor using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`HARBOR_*` prefix, `__` as separator)
//! 2. Project-level `.harbor/config.toml`
//! 3. User-level `~/.config/harbor/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `HARBOR_GENAI__API_KEY` -> `genai.api_key`,
//! `HARBOR_BACKEND__PROJECT_ID` -> `backend.project_id`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use harbor_config::HarborConfig;
//!
//! let config = HarborConfig::load_with_dotenv().expect("config");
//!
//! if !config.backend.is_configured() {
//!     println!("running against mock data");
//! }
//! ```

mod backend;
mod error;
mod flows;
mod general;
mod genai;
mod guard;
mod offline;

pub use backend::BackendConfig;
pub use error::ConfigError;
pub use flows::FlowsConfig;
pub use general::GeneralConfig;
pub use genai::GenAiConfig;
pub use guard::{GuardConfig, MIN_REDIRECT_COOLDOWN_MS};
pub use offline::OfflineConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment prefix for every Harbor setting.
pub const ENV_PREFIX: &str = "HARBOR_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HarborConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub genai: GenAiConfig,
    #[serde(default)]
    pub guard: GuardConfig,
    #[serde(default)]
    pub flows: FlowsConfig,
    #[serde(default)]
    pub offline: OfflineConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl HarborConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".harbor/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("harbor").join("config.toml"))
    }

    /// Names of optional sections that are missing required values.
    ///
    /// Neither section is fatal: an unconfigured backend falls back to mock
    /// data and an unconfigured model leaves only fallback flows working.
    #[must_use]
    pub fn unconfigured_sections(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.backend.is_configured() {
            missing.push("backend");
        }
        if !self.genai.is_configured() {
            missing.push("genai");
        }
        missing
    }

    /// Require a configured section.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when `section` lacks its required fields.
    pub fn require(&self, section: &str) -> Result<(), ConfigError> {
        let (configured, env_hint) = match section {
            "backend" => (
                self.backend.is_configured(),
                "HARBOR_BACKEND__API_KEY and HARBOR_BACKEND__PROJECT_ID",
            ),
            "genai" => (self.genai.is_configured(), "HARBOR_GENAI__API_KEY"),
            _ => (true, ""),
        };
        if configured {
            Ok(())
        } else {
            Err(ConfigError::NotConfigured {
                section: section.to_string(),
                env_hint,
            })
        }
    }

    /// Load `.env` from the workspace root, falling back to the current directory.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = HarborConfig::default();
        assert!(!config.backend.is_configured());
        assert!(!config.genai.is_configured());
        assert!(config.flows.allow_fallback);
        assert_eq!(config.guard.effective_cooldown_ms(), 1_000);
    }

    #[test]
    fn unconfigured_sections_lists_both_by_default() {
        let config = HarborConfig::default();
        assert_eq!(config.unconfigured_sections(), vec!["backend", "genai"]);
        let err = config.require("genai").unwrap_err();
        assert_eq!(
            err.to_string(),
            "[genai] is not configured; set HARBOR_GENAI__API_KEY"
        );
        assert!(config.require("general").is_ok());
    }
}
