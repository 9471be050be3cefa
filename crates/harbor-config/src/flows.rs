//! Flow adapter behaviour.

use serde::{Deserialize, Serialize};

const fn default_allow_fallback() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FlowsConfig {
    /// Substitute canned payloads when a flow that defines one fails upstream.
    #[serde(default = "default_allow_fallback")]
    pub allow_fallback: bool,
}

impl Default for FlowsConfig {
    fn default() -> Self {
        Self {
            allow_fallback: default_allow_fallback(),
        }
    }
}
