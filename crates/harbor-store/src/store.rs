//! The entity store container.

use harbor_core::entities::{Actor, ActorKind, ActorRef, Client, Notification, TeamMember};
use harbor_core::seed;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::change::{ChangeKind, Collection, Mutation, StoreChange};
use crate::error::StoreError;

/// Serializable copy of every collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub team_members: Vec<TeamMember>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

/// Single-writer, in-memory container for the CRM collections.
///
/// Mutations are synchronous and last-write-wins. Collection-specific
/// operations live in `crate::repos`.
#[derive(Debug)]
pub struct EntityStore {
    pub(crate) clients: Vec<Client>,
    pub(crate) team_members: Vec<TeamMember>,
    pub(crate) notifications: Vec<Notification>,
    changes: watch::Sender<StoreChange>,
}

impl EntityStore {
    /// Store populated with the static seed data.
    #[must_use]
    pub fn seeded() -> Self {
        Self::from_snapshot(StoreSnapshot {
            clients: seed::clients(),
            team_members: seed::team_members(),
            notifications: seed::notifications(),
        })
    }

    /// Empty store.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_snapshot(StoreSnapshot::default())
    }

    #[must_use]
    pub fn from_snapshot(snapshot: StoreSnapshot) -> Self {
        let (changes, _) = watch::channel(StoreChange::default());
        Self {
            clients: snapshot.clients,
            team_members: snapshot.team_members,
            notifications: snapshot.notifications,
            changes,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            clients: self.clients.clone(),
            team_members: self.team_members.clone(),
            notifications: self.notifications.clone(),
        }
    }

    /// Receive every future mutation. The receiver starts at the current revision.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<StoreChange> {
        self.changes.subscribe()
    }

    /// Current revision number.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.changes.borrow().revision
    }

    /// Total number of records across all collections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clients.len() + self.team_members.len() + self.notifications.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve a persisted actor reference against the current collections.
    #[must_use]
    pub fn find_actor(&self, actor: ActorRef) -> Option<Actor> {
        match actor.kind {
            ActorKind::Client => self.client(actor.id).cloned().map(Actor::Client),
            ActorKind::Staff => self.team_member(actor.id).cloned().map(Actor::Staff),
        }
    }

    pub(crate) fn notify(&self, collection: Collection, kind: ChangeKind, id: u32) {
        let revision = self.revision() + 1;
        tracing::debug!(%collection, ?kind, id, revision, "store mutation");
        self.changes.send_replace(StoreChange {
            revision,
            last: Some(Mutation {
                collection,
                kind,
                id,
            }),
        });
    }
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Replace the record whose id matches. Returns `false` when no record matched.
pub(crate) fn replace_by_id<T>(records: &mut [T], record: T, id_of: impl Fn(&T) -> u32) -> bool {
    let id = id_of(&record);
    match records.iter_mut().find(|existing| id_of(existing) == id) {
        Some(slot) => {
            *slot = record;
            true
        }
        None => false,
    }
}

/// One past the highest id in use, starting at 1.
pub(crate) fn next_id<T>(
    records: &[T],
    entity_type: &'static str,
    id_of: impl Fn(&T) -> u32,
) -> Result<u32, StoreError> {
    match records.iter().map(id_of).max() {
        None => Ok(1),
        Some(max) => max
            .checked_add(1)
            .ok_or(StoreError::IdsExhausted { entity_type }),
    }
}
