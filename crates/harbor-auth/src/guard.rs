//! Role-based route guard.

use chrono::{DateTime, Utc};
use harbor_config::GuardConfig;
use harbor_core::entities::Actor;
use harbor_core::enums::{ClientStatus, MemberStatus, Role};
use serde::Serialize;

use crate::lawyer_gate::{LawyerGate, RedirectThrottle};
use crate::routes::{self, LOGIN, NOT_AUTHORIZED, RouteTarget};
use crate::session::SessionState;

/// What the guard concluded about the session for a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardState {
    Public,
    Resolving,
    Unauthenticated,
    WrongRole,
    Authorized,
}

/// What the caller should do next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "target", rename_all = "snake_case")]
pub enum GuardDecision {
    Render,
    ShowLoading,
    Redirect(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuardOutcome {
    pub state: GuardState,
    pub decision: GuardDecision,
}

impl GuardOutcome {
    const fn new(state: GuardState, decision: GuardDecision) -> Self {
        Self { state, decision }
    }

    fn redirect(state: GuardState, target: &str) -> Self {
        Self::new(state, GuardDecision::Redirect(target.to_string()))
    }

    #[must_use]
    pub fn redirect_target(&self) -> Option<&str> {
        match &self.decision {
            GuardDecision::Redirect(target) => Some(target),
            GuardDecision::Render | GuardDecision::ShowLoading => None,
        }
    }
}

/// Route guard for one session. Holds the lawyer sub-guard's redirect
/// throttle, so reuse the same instance across evaluations.
#[derive(Debug, Clone, Default)]
pub struct RouteGuard {
    lawyer_gate: LawyerGate,
}

impl RouteGuard {
    #[must_use]
    pub fn new(config: &GuardConfig) -> Self {
        Self {
            lawyer_gate: LawyerGate::new(RedirectThrottle::from_config(config)),
        }
    }

    /// Role check without the lawyer sub-guard.
    ///
    /// Never redirects while the session is loading or the caller has not
    /// finished hydrating.
    #[must_use]
    pub fn check(session: &SessionState, hydrated: bool, path: &str) -> GuardOutcome {
        let target = routes::classify(path);
        if matches!(target, RouteTarget::Public) {
            return GuardOutcome::new(GuardState::Public, GuardDecision::Render);
        }

        if !hydrated || session.loading() {
            return GuardOutcome::new(GuardState::Resolving, GuardDecision::ShowLoading);
        }

        let RouteTarget::Area { role: required, .. } = target else {
            return GuardOutcome::redirect(GuardState::WrongRole, NOT_AUTHORIZED);
        };

        let Some(actor) = session.current_actor() else {
            return GuardOutcome::redirect(GuardState::Unauthenticated, LOGIN);
        };

        if is_suspended(actor) {
            return GuardOutcome::redirect(GuardState::WrongRole, NOT_AUTHORIZED);
        }

        let role = actor.role();
        if role == required {
            GuardOutcome::new(GuardState::Authorized, GuardDecision::Render)
        } else {
            GuardOutcome::redirect(GuardState::WrongRole, role.home_path())
        }
    }

    /// Full evaluation: role check, then the lawyer sub-guard for authorized lawyers.
    pub fn evaluate(
        &mut self,
        session: &SessionState,
        hydrated: bool,
        path: &str,
        now: DateTime<Utc>,
    ) -> GuardOutcome {
        let outcome = Self::check(session, hydrated, path);
        if outcome.state != GuardState::Authorized {
            tracing::debug!(path, state = ?outcome.state, decision = ?outcome.decision, "guard");
            return outcome;
        }

        let lawyer = session.current_actor().and_then(|actor| match actor {
            Actor::Staff(member) => member.lawyer_profile().map(|profile| (member.status, profile)),
            Actor::Client(_) => None,
        });
        match lawyer {
            Some((status, profile)) => GuardOutcome::new(
                GuardState::Authorized,
                self.lawyer_gate.evaluate(status, profile, path, now),
            ),
            None => outcome,
        }
    }
}

/// Accounts that may not enter any dashboard area.
///
/// Staff awaiting approval are only admitted when they are lawyers; the
/// lawyer sub-guard then holds them on the pending-approval page.
const fn is_suspended(actor: &Actor) -> bool {
    match actor {
        Actor::Client(client) => matches!(client.status, ClientStatus::Blocked),
        Actor::Staff(member) => match member.status {
            MemberStatus::Active => false,
            MemberStatus::AwaitingApproval => !matches!(member.role(), Role::Lawyer),
            MemberStatus::Blocked | MemberStatus::Rejected => true,
        },
    }
}
