//! Route guard configuration.

use serde::{Deserialize, Serialize};

/// Lower bound for the redirect cooldown, in milliseconds.
pub const MIN_REDIRECT_COOLDOWN_MS: u64 = 1_000;

const fn default_redirect_cooldown_ms() -> u64 {
    MIN_REDIRECT_COOLDOWN_MS
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GuardConfig {
    /// Minimum delay between two redirects to the same interstitial page.
    #[serde(default = "default_redirect_cooldown_ms")]
    pub redirect_cooldown_ms: u64,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            redirect_cooldown_ms: default_redirect_cooldown_ms(),
        }
    }
}

impl GuardConfig {
    /// Cooldown clamped to [`MIN_REDIRECT_COOLDOWN_MS`].
    #[must_use]
    pub fn effective_cooldown_ms(&self) -> u64 {
        self.redirect_cooldown_ms.max(MIN_REDIRECT_COOLDOWN_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cooldown_is_clamped() {
        let config = GuardConfig {
            redirect_cooldown_ms: 250,
        };
        assert_eq!(config.effective_cooldown_ms(), 1_000);

        let config = GuardConfig {
            redirect_cooldown_ms: 2_500,
        };
        assert_eq!(config.effective_cooldown_ms(), 2_500);
    }
}
