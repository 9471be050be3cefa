use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Client, LawyerProfile, TeamMember};
use crate::enums::Role;

/// The authenticated party: a client or a member of the firm's team.
///
/// The role is derived from the variant (and from [`super::TeamAccess`] for
/// staff), so callers never need to inspect optional role fields.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Actor {
    Client(Client),
    Staff(TeamMember),
}

impl Actor {
    #[must_use]
    pub const fn id(&self) -> u32 {
        match self {
            Self::Client(client) => client.account.id,
            Self::Staff(member) => member.account.id,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Client(client) => &client.account.name,
            Self::Staff(member) => &member.account.name,
        }
    }

    #[must_use]
    pub fn email(&self) -> &str {
        match self {
            Self::Client(client) => &client.account.email,
            Self::Staff(member) => &member.account.email,
        }
    }

    #[must_use]
    pub const fn role(&self) -> Role {
        match self {
            Self::Client(_) => Role::Client,
            Self::Staff(member) => member.role(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ActorKind {
        match self {
            Self::Client(_) => ActorKind::Client,
            Self::Staff(_) => ActorKind::Staff,
        }
    }

    #[must_use]
    pub const fn actor_ref(&self) -> ActorRef {
        ActorRef {
            kind: self.kind(),
            id: self.id(),
        }
    }

    /// Lawyer-only onboarding and billing state; `None` for every other role.
    #[must_use]
    pub const fn lawyer_profile(&self) -> Option<&LawyerProfile> {
        match self {
            Self::Client(_) => None,
            Self::Staff(member) => member.lawyer_profile(),
        }
    }

    /// Password-free projection for output.
    #[must_use]
    pub fn profile(&self) -> ActorProfile {
        let status = match self {
            Self::Client(client) => client.status.as_str(),
            Self::Staff(member) => member.status.as_str(),
        };
        ActorProfile {
            id: self.id(),
            kind: self.kind(),
            role: self.role(),
            name: self.name().to_string(),
            email: self.email().to_string(),
            status: status.to_string(),
        }
    }
}

/// Which collection an actor lives in. Ids are only unique per collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActorKind {
    Client,
    Staff,
}

impl ActorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Staff => "staff",
        }
    }
}

impl fmt::Display for ActorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable reference to an actor, persisted across process restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct ActorRef {
    pub kind: ActorKind,
    pub id: u32,
}

/// Public view of an actor. Contains no credentials.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ActorProfile {
    pub id: u32,
    pub kind: ActorKind,
    pub role: Role,
    pub name: String,
    pub email: String,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn staff_role_comes_from_access() {
        let team = seed::team_members();
        let roles: Vec<Role> = team
            .into_iter()
            .map(|member| Actor::Staff(member).role())
            .collect();
        assert!(roles.contains(&Role::Lawyer));
        assert!(roles.contains(&Role::Admin));
        assert!(roles.contains(&Role::Superadmin));
    }

    #[test]
    fn only_lawyers_expose_a_lawyer_profile() {
        for member in seed::team_members() {
            let is_lawyer = member.role() == Role::Lawyer;
            let actor = Actor::Staff(member);
            assert_eq!(actor.lawyer_profile().is_some(), is_lawyer);
        }
        let client = Actor::Client(seed::clients().remove(0));
        assert!(client.lawyer_profile().is_none());
    }

    #[test]
    fn profile_omits_password() {
        let actor = Actor::Client(seed::clients().remove(0));
        let json = serde_json::to_value(actor.profile()).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["role"], "client");
    }
}
