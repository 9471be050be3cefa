//! Errors raised while loading [`crate::HarborConfig`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or env value could not be merged into the config.
    #[error("failed to load harbor config: {0}")]
    Figment(#[from] figment::Error),

    /// `section` lacks the fields it needs; `env_hint` names what to set.
    #[error("[{section}] is not configured; set {env_hint}")]
    NotConfigured {
        section: String,
        env_hint: &'static str,
    },
}
