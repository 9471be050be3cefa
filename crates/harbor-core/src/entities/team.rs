use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Account;
use crate::enums::{MemberStatus, Role};

/// Lawyer-only account state checked by the lawyer sub-guard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LawyerProfile {
    #[serde(default)]
    pub onboarding_complete: bool,
    #[serde(default)]
    pub billing_set_up: bool,
    #[serde(default)]
    pub specialization: Option<String>,
}

/// Access level of a team member, tagged by `authRole`.
///
/// Only lawyers carry onboarding and billing state; the other variants have
/// no role-specific fields.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "authRole", rename_all = "snake_case")]
pub enum TeamAccess {
    Lawyer(LawyerProfile),
    Admin,
    Superadmin,
}

impl TeamAccess {
    #[must_use]
    pub const fn role(&self) -> Role {
        match self {
            Self::Lawyer(_) => Role::Lawyer,
            Self::Admin => Role::Admin,
            Self::Superadmin => Role::Superadmin,
        }
    }
}

/// A member of the firm's team (lawyers and administrators).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    #[serde(flatten)]
    pub account: Account,
    pub title: String,
    pub status: MemberStatus,
    pub access: TeamAccess,
}

impl TeamMember {
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.account.id
    }

    #[must_use]
    pub const fn role(&self) -> Role {
        self.access.role()
    }

    #[must_use]
    pub const fn lawyer_profile(&self) -> Option<&LawyerProfile> {
        match &self.access {
            TeamAccess::Lawyer(profile) => Some(profile),
            TeamAccess::Admin | TeamAccess::Superadmin => None,
        }
    }
}
