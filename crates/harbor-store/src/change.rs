//! Change notifications broadcast by the store.

use std::fmt;

use serde::Serialize;

/// Store collection touched by a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Clients,
    TeamMembers,
    Notifications,
}

impl Collection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Clients => "clients",
            Self::TeamMembers => "team_members",
            Self::Notifications => "notifications",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Added,
    Updated,
}

/// A single applied mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Mutation {
    pub collection: Collection,
    pub kind: ChangeKind,
    pub id: u32,
}

/// Latest store revision as seen by subscribers.
///
/// Revision `0` is the freshly loaded store; each applied mutation increments
/// it by one. No-op updates do not produce a revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StoreChange {
    pub revision: u64,
    pub last: Option<Mutation>,
}
