//! `hbr smoke`: end-to-end pass over the seeded store.
//!
//! Logs in as every seeded actor, runs the guard on their home route, renders
//! every page of their registry when the guard admits them, then runs each
//! fallback flow with no model available.

use chrono::Utc;
use harbor_auth::{GuardDecision, GuardState, RouteGuard, SessionResolver};
use harbor_config::{FlowsConfig, GuardConfig, HarborConfig};
use harbor_core::entities::Actor;
use harbor_core::enums::CaseStatus;
use harbor_core::flows::{CaseTimelineInput, DocumentChecklistInput};
use harbor_core::seed::DEMO_PASSWORD;
use harbor_dashboard::{DashboardPage, DashboardSession, PageBody, RenderContext, render};
use harbor_flows::catalogue::{CaseTimeline, DocumentChecklist};
use harbor_flows::{Flow, FlowOrigin, FlowRunner, UnavailableModel};
use harbor_store::EntityStore;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum Verdict {
    Pass,
    Fail,
}

#[derive(Debug, Serialize)]
struct StepResult {
    step: &'static str,
    subject: String,
    verdict: Verdict,
    detail: String,
}

#[derive(Debug, Default, Serialize)]
struct SmokeReport {
    passed: usize,
    failed: usize,
    results: Vec<StepResult>,
}

impl SmokeReport {
    fn record(&mut self, step: &'static str, subject: &str, ok: bool, detail: impl Into<String>) {
        let verdict = if ok {
            self.passed += 1;
            Verdict::Pass
        } else {
            self.failed += 1;
            Verdict::Fail
        };
        self.results.push(StepResult {
            step,
            subject: subject.to_string(),
            verdict,
            detail: detail.into(),
        });
    }
}

pub async fn handle(flags: &GlobalFlags, config: &HarborConfig) -> anyhow::Result<()> {
    let report = run(&config.guard).await;
    output(&report, flags.format)?;

    if report.failed > 0 {
        anyhow::bail!("{} smoke step(s) failed", report.failed);
    }
    Ok(())
}

async fn run(guard_config: &GuardConfig) -> SmokeReport {
    let store = EntityStore::seeded();
    let actors: Vec<Actor> = store
        .team_members()
        .iter()
        .cloned()
        .map(Actor::Staff)
        .chain(store.clients().iter().cloned().map(Actor::Client))
        .collect();

    let total = actors.len() + 2;
    let progress = Progress::bar(u64::try_from(total).unwrap_or(u64::MAX), "smoke");
    let mut report = SmokeReport::default();

    for actor in &actors {
        progress.set_message(actor.email());
        check_actor(&store, actor, guard_config, &mut report);
        progress.inc(1);
    }

    progress.set_message("fallback flows");
    check_fallback_flows(&mut report).await;
    progress.inc(2);

    if report.failed == 0 {
        progress.finish_ok("smoke passed");
    } else {
        progress.finish_err("smoke failed");
    }
    report
}

fn check_actor(store: &EntityStore, actor: &Actor, guard_config: &GuardConfig, report: &mut SmokeReport) {
    let subject = actor.email();
    let mut session = SessionResolver::new();
    let logged_in = session.login(store, subject, DEMO_PASSWORD);
    let ok = logged_in.as_ref().map(Actor::actor_ref) == Some(actor.actor_ref());
    report.record("login", subject, ok, format!("{} {}", actor.kind(), actor.id()));
    if !ok {
        return;
    }

    let home = actor.role().home_path();
    let outcome = RouteGuard::new(guard_config).evaluate(session.state(), true, home, Utc::now());
    let decided = !matches!(outcome.state, GuardState::Unauthenticated | GuardState::Resolving);
    let detail = match &outcome.decision {
        GuardDecision::Render => format!("{home} renders"),
        GuardDecision::ShowLoading => format!("{home} still loading"),
        GuardDecision::Redirect(target) => format!("{home} -> {target}"),
    };
    report.record("guard", subject, decided, detail);

    if outcome.decision != GuardDecision::Render {
        return;
    }

    let ctx = RenderContext { store, actor };
    let mut dashboard = DashboardSession::for_role(actor.role());
    for page in DashboardPage::all_for(actor.role()) {
        if dashboard.navigate(page.key()) != page {
            report.record("page", subject, false, format!("{}: key does not resolve", page.path()));
            continue;
        }
        let view = render(dashboard.current(), &ctx);
        match view.body {
            PageBody::NotFound { message } => {
                report.record("page", subject, false, format!("{}: {message}", page.path()));
            }
            _ => report.record("page", subject, true, page.path()),
        }
    }
}

async fn check_fallback_flows(report: &mut SmokeReport) {
    let runner = FlowRunner::new(UnavailableModel, &FlowsConfig::default());

    let timeline = runner
        .run::<CaseTimeline>(&CaseTimelineInput {
            case_type: "Permanent Residence".into(),
            visa_type: "Express Entry".into(),
            current_status: CaseStatus::Consultation,
            start_date: "2024-01-15".into(),
        })
        .await;
    record_flow(report, CaseTimeline::NAME, timeline.map(|reply| reply.origin));

    let checklist = runner
        .run::<DocumentChecklist>(&DocumentChecklistInput {
            visa_type: "Study Permit".into(),
            country_of_citizenship: "Mexico".into(),
            has_spouse: false,
            has_dependents: false,
        })
        .await;
    record_flow(report, DocumentChecklist::NAME, checklist.map(|reply| reply.origin));
}

fn record_flow(
    report: &mut SmokeReport,
    name: &str,
    origin: Result<FlowOrigin, harbor_flows::FlowError>,
) {
    match origin {
        Ok(FlowOrigin::Fallback) => report.record("flow", name, true, "fallback returned"),
        Ok(FlowOrigin::Model) => report.record("flow", name, false, "unexpected model answer"),
        Err(error) => report.record("flow", name, false, error.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn seeded_store_passes_smoke() {
        let report = run(&GuardConfig::default()).await;
        let failures: Vec<_> = report
            .results
            .iter()
            .filter(|result| result.verdict == Verdict::Fail)
            .collect();
        assert!(failures.is_empty(), "{failures:#?}");
        assert_eq!(report.failed, 0);
    }

    #[tokio::test]
    async fn gated_lawyers_stop_at_their_interstitial() {
        let report = run(&GuardConfig::default()).await;
        let guard_detail = |email: &str| {
            report
                .results
                .iter()
                .find(|result| result.step == "guard" && result.subject == email)
                .map(|result| result.detail.clone())
        };

        assert_eq!(
            guard_detail("james.carter@harborlaw.example").as_deref(),
            Some("/lawyer/dashboard -> /lawyer/pending-approval")
        );
        assert_eq!(
            guard_detail("daniel.brooks@harborlaw.example").as_deref(),
            Some("/lawyer/dashboard -> /lawyer/billing")
        );
        assert_eq!(
            guard_detail("yusuf.demir@example.com").as_deref(),
            Some("/client/dashboard -> /not-authorized")
        );
        assert!(
            !report
                .results
                .iter()
                .any(|result| result.step == "page" && result.subject.starts_with("james."))
        );
    }
}
