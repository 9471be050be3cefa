//! Rendering every registry page against the seeded store.

use harbor_core::entities::{Actor, ActorKind, ActorRef};
use harbor_core::enums::{NotificationTarget, Role};
use harbor_dashboard::{
    ClientPage, DashboardPage, LawyerPage, PageBody, RenderContext, StepState, render,
};
use harbor_store::EntityStore;
use pretty_assertions::assert_eq;

fn actor(store: &EntityStore, kind: ActorKind, id: u32) -> Actor {
    store.find_actor(ActorRef { kind, id }).unwrap()
}

#[test]
fn every_page_renders_for_its_role() {
    let store = EntityStore::seeded();
    let actors = [
        actor(&store, ActorKind::Client, 1),
        actor(&store, ActorKind::Staff, 1),
        actor(&store, ActorKind::Staff, 5),
        actor(&store, ActorKind::Staff, 6),
    ];

    for actor in &actors {
        let ctx = RenderContext {
            store: &store,
            actor,
        };
        for page in DashboardPage::all_for(actor.role()) {
            let view = render(page, &ctx);
            assert_eq!(view.role, actor.role());
            assert_eq!(view.key, page.key());
            assert!(
                !matches!(view.body, PageBody::NotFound { .. }),
                "{} / {}",
                actor.role(),
                page.key()
            );
        }
    }
}

#[test]
fn client_notifications_only_show_client_audience() {
    let store = EntityStore::seeded();
    let client = actor(&store, ActorKind::Client, 2);
    let view = render(
        DashboardPage::Client(ClientPage::Notifications),
        &RenderContext {
            store: &store,
            actor: &client,
        },
    );

    let PageBody::NotificationFeed(feed) = view.body else {
        panic!("expected notification feed");
    };
    assert!(!feed.items.is_empty());
    assert!(feed.items.iter().all(|n| matches!(
        n.target,
        NotificationTarget::AllUsers | NotificationTarget::Clients
    )));
    assert!(feed.items.iter().all(|n| !n.is_deleted));
}

#[test]
fn case_page_marks_progress_steps() {
    let store = EntityStore::seeded();
    let client = actor(&store, ActorKind::Client, 2);
    let view = render(
        DashboardPage::Client(ClientPage::Case),
        &RenderContext {
            store: &store,
            actor: &client,
        },
    );

    let PageBody::CaseProgress(progress) = view.body else {
        panic!("expected case progress");
    };
    let states: Vec<StepState> = progress.steps.iter().map(|s| s.state).collect();
    assert_eq!(
        states,
        vec![
            StepState::Completed,
            StepState::Completed,
            StepState::Completed,
            StepState::Current,
            StepState::Upcoming,
            StepState::Upcoming,
        ]
    );
    assert_eq!(progress.progress_percent, 60);
    assert_eq!(progress.lawyer.as_deref(), Some("Sarah Mitchell"));
}

#[test]
fn lawyer_client_table_is_scoped_to_assignments() {
    let store = EntityStore::seeded();
    let lawyer = actor(&store, ActorKind::Staff, 1);
    let view = render(
        DashboardPage::Lawyer(LawyerPage::Clients),
        &RenderContext {
            store: &store,
            actor: &lawyer,
        },
    );

    let PageBody::ClientTable(rows) = view.body else {
        panic!("expected client table");
    };
    let ids: Vec<u32> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 5]);
}

#[test]
fn lead_pipeline_lists_consultation_clients() {
    let store = EntityStore::seeded();
    let lawyer = actor(&store, ActorKind::Staff, 4);
    let view = render(
        DashboardPage::Lawyer(LawyerPage::Leads),
        &RenderContext {
            store: &store,
            actor: &lawyer,
        },
    );

    let PageBody::LeadPipeline(leads) = view.body else {
        panic!("expected lead pipeline");
    };
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0].name, "Grace Mensah");
    assert!(leads[0].assigned);
}

#[test]
fn page_from_another_role_is_not_found() {
    let store = EntityStore::seeded();
    let admin = actor(&store, ActorKind::Staff, 5);
    let view = render(
        DashboardPage::Lawyer(LawyerPage::Dashboard),
        &RenderContext {
            store: &store,
            actor: &admin,
        },
    );
    assert_eq!(view.role, Role::Lawyer);
    assert!(matches!(view.body, PageBody::NotFound { .. }));
}

#[test]
fn removed_client_renders_not_found() {
    let store = EntityStore::seeded();
    let mut ghost = actor(&store, ActorKind::Client, 1);
    if let Actor::Client(client) = &mut ghost {
        client.account.id = 99;
    }
    let view = render(
        DashboardPage::Client(ClientPage::Case),
        &RenderContext {
            store: &store,
            actor: &ghost,
        },
    );
    assert!(matches!(view.body, PageBody::NotFound { .. }));
}

#[test]
fn page_view_serializes_tagged_body() {
    let store = EntityStore::seeded();
    let admin = actor(&store, ActorKind::Staff, 5);
    let view = render(
        DashboardPage::resolve(Role::Admin, "settings"),
        &RenderContext {
            store: &store,
            actor: &admin,
        },
    );
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["role"], "admin");
    assert_eq!(json["body"]["type"], "sections");
    assert!(json["body"]["data"].as_array().is_some_and(|a| !a.is_empty()));
}
