//! Page rendering over the entity store.

use harbor_core::entities::{Actor, Client, TeamMember};
use harbor_core::enums::{CaseStatus, ClientStatus, MemberStatus, Priority, Role};
use harbor_store::EntityStore;

use crate::pages::{AdminPage, ClientPage, DashboardPage, LawyerPage, SuperadminPage};
use crate::view::{
    CaseProgressView, ClientRowView, LeadView, NotificationFeedView, PageBody, PageView, StatCard,
    StepState, StepView, TeamRowView,
};

/// Everything a page may read while rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub store: &'a EntityStore,
    pub actor: &'a Actor,
}

/// Render `page` for the context's actor.
///
/// A page from a role other than the actor's renders as
/// [`PageBody::NotFound`]; the route guard normally prevents that.
#[must_use]
pub fn render(page: DashboardPage, ctx: &RenderContext<'_>) -> PageView {
    let body = if page.role() == ctx.actor.role() {
        match page {
            DashboardPage::Client(page) => client_page(page, ctx),
            DashboardPage::Lawyer(page) => lawyer_page(page, ctx),
            DashboardPage::Admin(page) => admin_page(page, ctx),
            DashboardPage::Superadmin(page) => superadmin_page(page, ctx),
        }
    } else {
        PageBody::not_found(format!(
            "{} pages are not available to a {}",
            page.role(),
            ctx.actor.role()
        ))
    };

    PageView {
        role: page.role(),
        key: page.key(),
        title: page.title(),
        body,
    }
}

fn client_page(page: ClientPage, ctx: &RenderContext<'_>) -> PageBody {
    let Actor::Client(me) = ctx.actor else {
        return PageBody::not_found("client record not found");
    };
    // The actor may be stale relative to the store; prefer the live record.
    let Some(me) = ctx.store.client(me.id()) else {
        return PageBody::not_found(format!("client {} not found", me.id()));
    };

    match page {
        ClientPage::Overview => PageBody::Statistics(vec![
            StatCard::new("Case status", me.case.current_status),
            StatCard::new("Progress", format!("{}%", me.case.current_status.progress_percent())),
            StatCard::new("Next step", &me.case.next_step),
            StatCard::new("Due date", me.case.due_date),
            StatCard::new("Unread notifications", ctx.store.unread_count(Role::Client)),
        ]),
        ClientPage::Case => PageBody::CaseProgress(case_progress(ctx.store, me)),
        ClientPage::Documents => {
            PageBody::Sections(vec!["Required documents", "Uploaded documents", "Translations"])
        }
        ClientPage::Appointments => PageBody::Sections(vec!["Upcoming", "Past consultations"]),
        ClientPage::Billing => PageBody::Sections(vec!["Invoices", "Payment methods"]),
        ClientPage::Messages => PageBody::Sections(vec!["Conversation with your lawyer"]),
        ClientPage::Notifications => notification_feed(ctx.store, Role::Client),
        ClientPage::AiTools => PageBody::Sections(vec![
            "CRS score calculator",
            "Document checklist",
            "Case timeline",
            "Resume builder",
            "Cover letter writer",
        ]),
        ClientPage::Profile => PageBody::Profile(Actor::Client(me.clone()).profile()),
    }
}

fn lawyer_page(page: LawyerPage, ctx: &RenderContext<'_>) -> PageBody {
    let lawyer_id = ctx.actor.id();
    if ctx.store.team_member(lawyer_id).is_none() {
        return PageBody::not_found(format!("team member {lawyer_id} not found"));
    }

    match page {
        LawyerPage::Dashboard => {
            let mine: Vec<&Client> = ctx.store.clients_for_lawyer(lawyer_id).collect();
            PageBody::Statistics(vec![
                StatCard::new(
                    "Active clients",
                    mine.iter().filter(|c| c.status == ClientStatus::Active).count(),
                ),
                StatCard::new(
                    "High priority cases",
                    mine.iter().filter(|c| c.case.priority == Priority::High).count(),
                ),
                StatCard::new("Open leads", leads(ctx.store, Some(lawyer_id)).len()),
                StatCard::new("Unread notifications", ctx.store.unread_count(Role::Lawyer)),
            ])
        }
        LawyerPage::Clients => PageBody::ClientTable(
            ctx.store
                .clients_for_lawyer(lawyer_id)
                .map(|c| client_row(ctx.store, c))
                .collect(),
        ),
        LawyerPage::Leads => PageBody::LeadPipeline(leads(ctx.store, Some(lawyer_id))),
        LawyerPage::Documents => PageBody::Sections(vec!["Pending review", "Verified"]),
        LawyerPage::Appointments => PageBody::Sections(vec!["Calendar", "Availability"]),
        LawyerPage::Billing => PageBody::Sections(vec!["Plan", "Payment method", "Invoices"]),
        LawyerPage::Notifications => notification_feed(ctx.store, Role::Lawyer),
        LawyerPage::AiTools => PageBody::Sections(vec![
            "Risk assessment",
            "Intake review",
            "Document analysis",
            "Case timeline",
            "Document checklist",
        ]),
        LawyerPage::Team => PageBody::TeamRoster(
            ctx.store
                .team_with_role(Role::Lawyer)
                .filter(|m| m.status == MemberStatus::Active)
                .map(team_row)
                .collect(),
        ),
        LawyerPage::Profile => profile(ctx),
    }
}

fn admin_page(page: AdminPage, ctx: &RenderContext<'_>) -> PageBody {
    match page {
        AdminPage::Dashboard => PageBody::Statistics(vec![
            StatCard::new("Clients", ctx.store.clients().len()),
            StatCard::new(
                "Active clients",
                ctx.store
                    .clients()
                    .iter()
                    .filter(|c| c.status == ClientStatus::Active)
                    .count(),
            ),
            StatCard::new("Team members", ctx.store.team_members().len()),
            StatCard::new("Pending approvals", pending_approvals(ctx.store)),
        ]),
        AdminPage::Clients => PageBody::ClientTable(
            ctx.store
                .clients()
                .iter()
                .map(|c| client_row(ctx.store, c))
                .collect(),
        ),
        AdminPage::Team => {
            PageBody::TeamRoster(ctx.store.team_members().iter().map(team_row).collect())
        }
        AdminPage::Notifications => notification_feed(ctx.store, Role::Admin),
        AdminPage::Billing => PageBody::Sections(vec!["Firm subscription", "Invoices"]),
        AdminPage::Reports => PageBody::Sections(vec!["Case outcomes", "Revenue", "Lawyer workload"]),
        AdminPage::Settings => PageBody::Sections(vec!["Firm profile", "Roles and permissions"]),
    }
}

fn superadmin_page(page: SuperadminPage, ctx: &RenderContext<'_>) -> PageBody {
    match page {
        SuperadminPage::Dashboard => PageBody::Statistics(vec![
            StatCard::new("Clients", ctx.store.clients().len()),
            StatCard::new("Lawyers", ctx.store.team_with_role(Role::Lawyer).count()),
            StatCard::new("Admins", ctx.store.team_with_role(Role::Admin).count()),
            StatCard::new("Pending approvals", pending_approvals(ctx.store)),
            StatCard::new(
                "Notifications",
                ctx.store.visible_notifications(Role::Superadmin).len(),
            ),
        ]),
        SuperadminPage::Firms => PageBody::Sections(vec!["Registered firms", "Firm onboarding"]),
        SuperadminPage::Lawyers => PageBody::TeamRoster(
            ctx.store
                .team_with_role(Role::Lawyer)
                .map(team_row)
                .collect(),
        ),
        SuperadminPage::Notifications => notification_feed(ctx.store, Role::Superadmin),
        SuperadminPage::Billing => PageBody::Sections(vec!["Plans", "Platform revenue"]),
        SuperadminPage::Settings => PageBody::Sections(vec!["Platform settings", "Feature flags"]),
    }
}

fn profile(ctx: &RenderContext<'_>) -> PageBody {
    ctx.store.find_actor(ctx.actor.actor_ref()).map_or_else(
        || PageBody::not_found(format!("actor {} not found", ctx.actor.id())),
        |actor| PageBody::Profile(actor.profile()),
    )
}

fn case_progress(store: &EntityStore, client: &Client) -> CaseProgressView {
    let current = client.case.current_status;
    let steps = CaseStatus::STEPS
        .iter()
        .map(|&stage| StepView {
            stage,
            state: match stage.step_index().cmp(&current.step_index()) {
                std::cmp::Ordering::Less => StepState::Completed,
                std::cmp::Ordering::Equal => StepState::Current,
                std::cmp::Ordering::Greater => StepState::Upcoming,
            },
        })
        .collect();

    CaseProgressView {
        case_type: client.case.case_type.clone(),
        visa_type: client.visa_type.clone(),
        current_status: current,
        progress_percent: current.progress_percent(),
        steps,
        next_step: client.case.next_step.clone(),
        due_date: client.case.due_date,
        lawyer: lawyer_name(store, client),
    }
}

fn lawyer_name(store: &EntityStore, client: &Client) -> Option<String> {
    client
        .lawyer_id
        .and_then(|id| store.team_member(id))
        .map(|m| m.account.name.clone())
}

fn client_row(store: &EntityStore, client: &Client) -> ClientRowView {
    ClientRowView {
        id: client.id(),
        name: client.account.name.clone(),
        email: client.account.email.clone(),
        status: client.status,
        country: client.country.clone(),
        visa_type: client.visa_type.clone(),
        case_status: client.case.current_status,
        priority: client.case.priority,
        lawyer: lawyer_name(store, client),
    }
}

fn team_row(member: &TeamMember) -> TeamRowView {
    TeamRowView {
        id: member.id(),
        name: member.account.name.clone(),
        email: member.account.email.clone(),
        title: member.title.clone(),
        role: member.role(),
        status: member.status,
    }
}

/// Clients still in consultation that belong to `lawyer_id` or to nobody.
fn leads(store: &EntityStore, lawyer_id: Option<u32>) -> Vec<LeadView> {
    store
        .clients()
        .iter()
        .filter(|c| c.case.current_status == CaseStatus::Consultation)
        .filter(|c| matches!(c.status, ClientStatus::Active | ClientStatus::OnHold))
        .filter(|c| c.lawyer_id.is_none() || c.lawyer_id == lawyer_id)
        .map(|c| LeadView {
            id: c.id(),
            name: c.account.name.clone(),
            email: c.account.email.clone(),
            visa_type: c.visa_type.clone(),
            country: c.country.clone(),
            joined_date: c.joined_date,
            next_step: c.case.next_step.clone(),
            assigned: c.lawyer_id.is_some(),
        })
        .collect()
}

fn pending_approvals(store: &EntityStore) -> usize {
    store
        .team_members()
        .iter()
        .filter(|m| m.status == MemberStatus::AwaitingApproval)
        .count()
}

fn notification_feed(store: &EntityStore, role: Role) -> PageBody {
    PageBody::NotificationFeed(NotificationFeedView {
        unread: store.unread_count(role),
        items: store.visible_notifications(role).into_iter().cloned().collect(),
    })
}
