//! Lawyer sub-guard: approval, onboarding, and billing interstitials.

use chrono::{DateTime, TimeDelta, Utc};
use harbor_config::GuardConfig;
use harbor_core::entities::LawyerProfile;
use harbor_core::enums::MemberStatus;

use crate::guard::GuardDecision;
use crate::routes::{self, LAWYER_BILLING, LAWYER_ONBOARDING, LAWYER_PENDING_APPROVAL};

/// Suppresses repeat redirects to the same target inside a cooldown window.
#[derive(Debug, Clone)]
pub struct RedirectThrottle {
    cooldown: TimeDelta,
    last: Option<(String, DateTime<Utc>)>,
}

impl RedirectThrottle {
    #[must_use]
    pub const fn new(cooldown: TimeDelta) -> Self {
        Self {
            cooldown,
            last: None,
        }
    }

    #[must_use]
    pub fn from_config(config: &GuardConfig) -> Self {
        let millis = i64::try_from(config.effective_cooldown_ms()).unwrap_or(i64::MAX);
        Self::new(TimeDelta::try_milliseconds(millis).unwrap_or(TimeDelta::MAX))
    }

    #[must_use]
    pub const fn cooldown(&self) -> TimeDelta {
        self.cooldown
    }

    /// Record a redirect attempt. Returns `false` if the same target was
    /// already redirected to less than one cooldown ago.
    pub fn attempt(&mut self, target: &str, now: DateTime<Utc>) -> bool {
        if let Some((last_target, at)) = &self.last
            && last_target == target
            && now.signed_duration_since(*at) < self.cooldown
        {
            return false;
        }
        self.last = Some((target.to_string(), now));
        true
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

impl Default for RedirectThrottle {
    fn default() -> Self {
        Self::from_config(&GuardConfig::default())
    }
}

/// Interstitial a lawyer must visit before the dashboard, if any.
///
/// Checked in order: approval, onboarding, billing.
#[must_use]
pub const fn required_interstitial(
    status: MemberStatus,
    profile: &LawyerProfile,
) -> Option<&'static str> {
    if matches!(status, MemberStatus::AwaitingApproval) {
        Some(LAWYER_PENDING_APPROVAL)
    } else if !profile.onboarding_complete {
        Some(LAWYER_ONBOARDING)
    } else if !profile.billing_set_up {
        Some(LAWYER_BILLING)
    } else {
        None
    }
}

#[derive(Debug, Clone, Default)]
pub struct LawyerGate {
    throttle: RedirectThrottle,
}

impl LawyerGate {
    #[must_use]
    pub const fn new(throttle: RedirectThrottle) -> Self {
        Self { throttle }
    }

    /// Decide for an authorized lawyer at `path`.
    pub fn evaluate(
        &mut self,
        status: MemberStatus,
        profile: &LawyerProfile,
        path: &str,
        now: DateTime<Utc>,
    ) -> GuardDecision {
        let Some(target) = required_interstitial(status, profile) else {
            return GuardDecision::Render;
        };
        if routes::normalize(path) == target {
            return GuardDecision::Render;
        }
        if self.throttle.attempt(target, now) {
            tracing::debug!(target, path, "lawyer redirected to interstitial");
            GuardDecision::Redirect(target.to_string())
        } else {
            tracing::debug!(target, path, "redirect suppressed by cooldown");
            GuardDecision::ShowLoading
        }
    }
}
