//! Session resolution against the entity store.

use harbor_core::entities::Actor;
use harbor_store::EntityStore;

use crate::session_file::StoredSession;

/// Where session resolution stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing resolved yet. Guards must not redirect in this state.
    #[default]
    Loading,
    /// Resolution finished; `None` means nobody is logged in.
    Resolved(Option<Actor>),
}

impl SessionState {
    #[must_use]
    pub const fn loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub const fn current_actor(&self) -> Option<&Actor> {
        match self {
            Self::Resolved(Some(actor)) => Some(actor),
            Self::Loading | Self::Resolved(None) => None,
        }
    }
}

/// Holds the session for one process and resolves logins against the store.
#[derive(Debug, Default)]
pub struct SessionResolver {
    state: SessionState,
}

impl SessionResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub const fn loading(&self) -> bool {
        self.state.loading()
    }

    #[must_use]
    pub const fn current_actor(&self) -> Option<&Actor> {
        self.state.current_actor()
    }

    /// Match `identifier`/`credential` against team members, then clients.
    ///
    /// The identifier is trimmed and compared case-insensitively against the
    /// email; the credential must match exactly. The store is only read.
    pub fn login(
        &mut self,
        store: &EntityStore,
        identifier: &str,
        credential: &str,
    ) -> Option<Actor> {
        let staff = store
            .team_members()
            .iter()
            .find(|member| {
                member.account.matches_identifier(identifier)
                    && member.account.password == credential
            })
            .cloned()
            .map(Actor::Staff);

        let actor = staff.or_else(|| {
            store
                .clients()
                .iter()
                .find(|client| {
                    client.account.matches_identifier(identifier)
                        && client.account.password == credential
                })
                .cloned()
                .map(Actor::Client)
        });

        match &actor {
            Some(found) => {
                tracing::info!(kind = %found.kind(), id = found.id(), role = %found.role(), "login succeeded");
            }
            None => tracing::info!("login failed: no matching account"),
        }

        self.state = SessionState::Resolved(actor.clone());
        actor
    }

    pub fn logout(&mut self) {
        if let Some(actor) = self.current_actor() {
            tracing::debug!(kind = %actor.kind(), id = actor.id(), "logout");
        }
        self.state = SessionState::Resolved(None);
    }

    /// Resolve a persisted session against the current store contents.
    ///
    /// A reference to an actor that no longer exists resolves to nobody.
    pub fn hydrate(&mut self, store: &EntityStore, stored: Option<&StoredSession>) {
        let actor = stored.and_then(|session| {
            let found = store.find_actor(session.actor);
            if found.is_none() {
                tracing::warn!(
                    kind = %session.actor.kind,
                    id = session.actor.id,
                    "stored session refers to a missing actor; ignoring it"
                );
            }
            found
        });
        self.state = SessionState::Resolved(actor);
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use harbor_core::entities::{ActorKind, ActorRef};
    use harbor_core::enums::Role;
    use harbor_core::seed::DEMO_PASSWORD;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn starts_loading() {
        let resolver = SessionResolver::new();
        assert!(resolver.loading());
        assert!(resolver.current_actor().is_none());
    }

    #[test]
    fn login_trims_and_ignores_email_case() {
        let store = EntityStore::seeded();
        let mut resolver = SessionResolver::new();

        let actor = resolver
            .login(&store, "  Sarah.Mitchell@HarborLaw.example ", DEMO_PASSWORD)
            .unwrap();

        assert_eq!(actor.role(), Role::Lawyer);
        assert!(!resolver.loading());
        assert_eq!(resolver.current_actor(), Some(&actor));
    }

    #[test]
    fn login_password_is_case_sensitive() {
        let store = EntityStore::seeded();
        let mut resolver = SessionResolver::new();
        assert!(
            resolver
                .login(&store, "amara.okafor@example.com", "PASSWORD123")
                .is_none()
        );
        assert_eq!(resolver.state(), &SessionState::Resolved(None));
    }

    #[test]
    fn failed_login_leaves_store_untouched() {
        let store = EntityStore::seeded();
        let before = store.snapshot();
        let revision = store.revision();
        let mut resolver = SessionResolver::new();

        assert!(resolver.login(&store, "nobody@example.com", "x").is_none());

        assert_eq!(store.snapshot(), before);
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn client_login_resolves_client_actor() {
        let store = EntityStore::seeded();
        let mut resolver = SessionResolver::new();
        let actor = resolver
            .login(&store, "amara.okafor@example.com", DEMO_PASSWORD)
            .unwrap();
        assert_eq!(actor.kind(), ActorKind::Client);
        assert_eq!(actor.id(), 1);
    }

    #[test]
    fn logout_clears_actor() {
        let store = EntityStore::seeded();
        let mut resolver = SessionResolver::new();
        resolver.login(&store, "emma.wilson@harborlaw.example", DEMO_PASSWORD);
        resolver.logout();
        assert_eq!(resolver.state(), &SessionState::Resolved(None));
    }

    #[test]
    fn hydrate_resolves_existing_and_drops_missing() {
        let store = EntityStore::seeded();
        let mut resolver = SessionResolver::new();

        let stored = StoredSession {
            actor: ActorRef {
                kind: ActorKind::Staff,
                id: 6,
            },
            role: Role::Superadmin,
            logged_in_at: Utc::now(),
        };
        resolver.hydrate(&store, Some(&stored));
        assert_eq!(resolver.current_actor().map(Actor::role), Some(Role::Superadmin));

        let missing = StoredSession {
            actor: ActorRef {
                kind: ActorKind::Client,
                id: 404,
            },
            ..stored
        };
        resolver.hydrate(&store, Some(&missing));
        assert_eq!(resolver.state(), &SessionState::Resolved(None));

        resolver.hydrate(&store, None);
        assert!(!resolver.loading());
    }
}
