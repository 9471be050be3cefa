//! End-to-end guard behaviour over the seeded store.

use chrono::{DateTime, TimeDelta, Utc};
use harbor_auth::routes::{LAWYER_BILLING, LAWYER_PENDING_APPROVAL};
use harbor_auth::{GuardDecision, GuardState, RouteGuard, SessionResolver};
use harbor_config::GuardConfig;
use harbor_core::entities::TeamAccess;
use harbor_core::seed::DEMO_PASSWORD;
use harbor_store::EntityStore;
use pretty_assertions::assert_eq;

fn start() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-05-20T09:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

#[test]
fn pending_lawyer_never_reaches_a_dashboard_page() {
    let store = EntityStore::seeded();
    let mut session = SessionResolver::new();
    session
        .login(&store, "james.carter@harborlaw.example", DEMO_PASSWORD)
        .unwrap();

    let mut guard = RouteGuard::new(&GuardConfig::default());
    for (offset, path) in ["/lawyer/dashboard", "/lawyer/clients", "/lawyer/billing"]
        .into_iter()
        .enumerate()
    {
        let now = start() + TimeDelta::seconds(i64::try_from(offset).unwrap() * 5);
        let outcome = guard.evaluate(session.state(), true, path, now);
        assert_eq!(
            outcome.decision,
            GuardDecision::Redirect(LAWYER_PENDING_APPROVAL.into()),
            "{path}"
        );
    }

    let outcome = guard.evaluate(session.state(), true, LAWYER_PENDING_APPROVAL, start());
    assert_eq!(outcome.decision, GuardDecision::Render);
}

#[test]
fn billing_redirect_is_emitted_once_per_cooldown() {
    let mut store = EntityStore::seeded();
    let mut lawyer = store.team_member(1).cloned().unwrap();
    if let TeamAccess::Lawyer(profile) = &mut lawyer.access {
        profile.billing_set_up = false;
    }
    assert!(store.update_team_member(lawyer));

    let mut session = SessionResolver::new();
    session
        .login(&store, "sarah.mitchell@harborlaw.example", DEMO_PASSWORD)
        .unwrap();

    let mut guard = RouteGuard::new(&GuardConfig::default());
    let redirects = (0..10)
        .map(|step| start() + TimeDelta::milliseconds(step * 90))
        .map(|now| guard.evaluate(session.state(), true, "/lawyer/dashboard", now))
        .filter(|outcome| outcome.decision == GuardDecision::Redirect(LAWYER_BILLING.into()))
        .count();
    assert_eq!(redirects, 1);

    let later = guard.evaluate(
        session.state(),
        true,
        "/lawyer/dashboard",
        start() + TimeDelta::seconds(2),
    );
    assert_eq!(later.state, GuardState::Authorized);
    assert_eq!(later.redirect_target(), Some(LAWYER_BILLING));
}
