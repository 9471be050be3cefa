//! `hbr open` and `hbr page`: guard evaluation and page rendering.

use chrono::Utc;
use harbor_auth::routes::{self, LAWYER_ONBOARDING, LAWYER_PENDING_APPROVAL, RouteTarget};
use harbor_auth::{GuardDecision, GuardState, RouteGuard};
use harbor_dashboard::{DashboardPage, PageView, RenderContext, render};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{OpenArgs, PageArgs};
use crate::context::AppContext;
use crate::output::output;

/// Redirects followed before `open` gives up.
const MAX_HOPS: usize = 5;

#[derive(Debug, Serialize)]
struct Hop {
    path: String,
    state: GuardState,
    decision: GuardDecision,
}

#[derive(Debug, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
enum Landing {
    /// A dashboard page rendered for the actor.
    Page { page: PageView },
    /// A page outside the dashboards, e.g. `/login` or a lawyer interstitial.
    Screen { path: String },
    /// The guard is still resolving the session.
    Loading,
}

#[derive(Debug, Serialize)]
struct OpenResponse {
    requested: String,
    hops: Vec<Hop>,
    landing: Landing,
}

pub fn handle_open(args: &OpenArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&follow(ctx, &args.path)?, flags.format)
}

pub fn handle_page(args: &PageArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let actor = ctx.require_actor()?;
    let page = match args.key.as_deref() {
        Some(key) => DashboardPage::resolve(actor.role(), key),
        None => DashboardPage::default_for(actor.role()),
    };
    // Go through the guard so lawyer interstitials apply here too.
    output(&follow(ctx, &page.path())?, flags.format)
}

/// Evaluate the guard for `start`, following redirects until something renders.
fn follow(ctx: &AppContext, start: &str) -> anyhow::Result<OpenResponse> {
    let mut guard = RouteGuard::new(&ctx.config.guard);
    let mut path = start.to_string();
    let mut hops = Vec::new();

    while hops.len() <= MAX_HOPS {
        let outcome = guard.evaluate(ctx.session.state(), true, &path, Utc::now());
        tracing::debug!(%path, state = ?outcome.state, decision = ?outcome.decision, "open");
        hops.push(Hop {
            path: path.clone(),
            state: outcome.state,
            decision: outcome.decision.clone(),
        });

        match outcome.decision {
            GuardDecision::Render => {
                return Ok(OpenResponse {
                    requested: start.to_string(),
                    landing: land(ctx, &path),
                    hops,
                });
            }
            GuardDecision::ShowLoading => {
                return Ok(OpenResponse {
                    requested: start.to_string(),
                    landing: Landing::Loading,
                    hops,
                });
            }
            GuardDecision::Redirect(target) => path = target,
        }
    }

    anyhow::bail!("redirect loop: gave up after {MAX_HOPS} redirects from {start}")
}

fn land(ctx: &AppContext, path: &str) -> Landing {
    let screen = || Landing::Screen {
        path: routes::normalize(path).to_string(),
    };

    let (RouteTarget::Area { role, page }, Some(actor)) =
        (routes::classify(path), ctx.session.current_actor())
    else {
        return screen();
    };

    let normalized = routes::normalize(path);
    if normalized == LAWYER_PENDING_APPROVAL || normalized == LAWYER_ONBOARDING {
        return screen();
    }

    let key = page.split('/').next().unwrap_or_default();
    let page = DashboardPage::resolve(role, key);
    Landing::Page {
        page: render(
            page,
            &RenderContext {
                store: &ctx.store,
                actor,
            },
        ),
    }
}

#[cfg(test)]
mod tests {
    use harbor_auth::{SessionFile, SessionResolver};
    use harbor_config::HarborConfig;
    use harbor_core::seed::DEMO_PASSWORD;
    use harbor_store::{EntityStore, StoreOrigin};
    use pretty_assertions::assert_eq;

    use super::*;

    fn context(login: Option<&str>) -> AppContext {
        let store = EntityStore::seeded();
        let mut session = SessionResolver::new();
        match login {
            Some(email) => {
                session.login(&store, email, DEMO_PASSWORD);
            }
            None => session.logout(),
        }
        AppContext {
            config: HarborConfig::default(),
            store,
            origin: StoreOrigin::Mock,
            session,
            session_file: SessionFile::new(std::env::temp_dir().join("hbr-navigate-test.json")),
        }
    }

    fn hop_paths(response: &OpenResponse) -> Vec<&str> {
        response.hops.iter().map(|hop| hop.path.as_str()).collect()
    }

    #[test]
    fn anonymous_visitor_lands_on_login() {
        let response = follow(&context(None), "/lawyer/dashboard").expect("follow");
        assert_eq!(hop_paths(&response), vec!["/lawyer/dashboard", "/login"]);
        assert!(matches!(&response.landing, Landing::Screen { path } if path == "/login"));
    }

    #[test]
    fn pending_lawyer_lands_on_interstitial() {
        let ctx = context(Some("james.carter@harborlaw.example"));
        let response = follow(&ctx, "/lawyer/leads").expect("follow");
        assert_eq!(
            hop_paths(&response),
            vec!["/lawyer/leads", "/lawyer/pending-approval"]
        );
        assert!(
            matches!(&response.landing, Landing::Screen { path } if path == "/lawyer/pending-approval")
        );
    }

    #[test]
    fn wrong_role_is_sent_home_and_rendered() {
        let ctx = context(Some("emma.wilson@harborlaw.example"));
        let response = follow(&ctx, "/client/case").expect("follow");
        assert_eq!(hop_paths(&response), vec!["/client/case", "/admin/dashboard"]);
        let Landing::Page { page } = &response.landing else {
            panic!("expected a rendered page, got {:?}", response.landing);
        };
        assert_eq!(page.role, harbor_core::enums::Role::Admin);
        assert_eq!(page.key, "dashboard");
    }

    #[test]
    fn billing_gate_renders_billing_page() {
        let ctx = context(Some("daniel.brooks@harborlaw.example"));
        let response = follow(&ctx, "/lawyer/dashboard").expect("follow");
        let Landing::Page { page } = &response.landing else {
            panic!("expected a rendered page, got {:?}", response.landing);
        };
        assert_eq!(page.key, "billing");
    }
}
