//! Roles, statuses, and audience enums for Harbor.
//!
//! Serialized values mirror the documents stored by the hosted backend and are
//! quoted verbatim in flow prompts, so renames here are breaking changes.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Authorization role of an actor. Each role owns one dashboard area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Client,
    Lawyer,
    Admin,
    Superadmin,
}

impl Role {
    pub const ALL: [Self; 4] = [Self::Client, Self::Lawyer, Self::Admin, Self::Superadmin];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Lawyer => "lawyer",
            Self::Admin => "admin",
            Self::Superadmin => "superadmin",
        }
    }

    /// First path segment of this role's dashboard area.
    #[must_use]
    pub const fn area(self) -> &'static str {
        self.as_str()
    }

    /// Landing route after login.
    #[must_use]
    pub const fn home_path(self) -> &'static str {
        match self {
            Self::Client => "/client/dashboard",
            Self::Lawyer => "/lawyer/dashboard",
            Self::Admin => "/admin/dashboard",
            Self::Superadmin => "/superadmin/dashboard",
        }
    }

    /// Map a path segment back to the role owning that area.
    #[must_use]
    pub fn from_area(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.area() == segment)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ClientStatus
// ---------------------------------------------------------------------------

/// Account status of a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ClientStatus {
    Active,
    #[serde(rename = "On-hold")]
    OnHold,
    Closed,
    Blocked,
}

impl ClientStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::OnHold => "On-hold",
            Self::Closed => "Closed",
            Self::Blocked => "Blocked",
        }
    }
}

impl fmt::Display for ClientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClientStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "on-hold" | "on_hold" | "onhold" => Ok(Self::OnHold),
            "closed" => Ok(Self::Closed),
            "blocked" => Ok(Self::Blocked),
            other => Err(CoreError::Validation(format!(
                "unknown client status '{other}'"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// MemberStatus
// ---------------------------------------------------------------------------

/// Account status of a team member.
///
/// ```text
/// awaiting_approval → Active
///                   → Rejected
/// Active ↔ Blocked
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum MemberStatus {
    Active,
    #[serde(rename = "awaiting_approval")]
    AwaitingApproval,
    Rejected,
    Blocked,
}

impl MemberStatus {
    #[must_use]
    #[allow(clippy::match_same_arms)]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::AwaitingApproval => &[Self::Active, Self::Rejected],
            Self::Active => &[Self::Blocked],
            Self::Blocked => &[Self::Active],
            Self::Rejected => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::AwaitingApproval => "awaiting_approval",
            Self::Rejected => "Rejected",
            Self::Blocked => "Blocked",
        }
    }
}

impl fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MemberStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "awaiting_approval" | "awaiting-approval" => Ok(Self::AwaitingApproval),
            "rejected" => Ok(Self::Rejected),
            "blocked" => Ok(Self::Blocked),
            other => Err(CoreError::Validation(format!(
                "unknown member status '{other}'"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// CaseStatus
// ---------------------------------------------------------------------------

/// Stage of an immigration case. The order is the order of the progress steps.
///
/// ```text
/// Consultation → Document Collection → Application Preparation
///              → Submitted → Under Review → Decision
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub enum CaseStatus {
    Consultation,
    #[serde(rename = "Document Collection")]
    DocumentCollection,
    #[serde(rename = "Application Preparation")]
    ApplicationPreparation,
    Submitted,
    #[serde(rename = "Under Review")]
    UnderReview,
    Decision,
}

impl CaseStatus {
    pub const STEPS: [Self; 6] = [
        Self::Consultation,
        Self::DocumentCollection,
        Self::ApplicationPreparation,
        Self::Submitted,
        Self::UnderReview,
        Self::Decision,
    ];

    /// Zero-based position in [`Self::STEPS`].
    #[must_use]
    pub const fn step_index(self) -> usize {
        match self {
            Self::Consultation => 0,
            Self::DocumentCollection => 1,
            Self::ApplicationPreparation => 2,
            Self::Submitted => 3,
            Self::UnderReview => 4,
            Self::Decision => 5,
        }
    }

    /// Completion percentage shown by the progress bar (0–100).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn progress_percent(self) -> u8 {
        (self.step_index() * 100 / (Self::STEPS.len() - 1)) as u8
    }

    /// The stage after this one, or `None` once a decision has been issued.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::STEPS.get(self.step_index() + 1).copied()
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Consultation => "Consultation",
            Self::DocumentCollection => "Document Collection",
            Self::ApplicationPreparation => "Application Preparation",
            Self::Submitted => "Submitted",
            Self::UnderReview => "Under Review",
            Self::Decision => "Decision",
        }
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Case priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// NotificationTarget
// ---------------------------------------------------------------------------

/// Audience of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum NotificationTarget {
    #[serde(rename = "All Users")]
    AllUsers,
    Lawyers,
    Clients,
}

impl NotificationTarget {
    /// Whether an actor with `role` may see a notification sent to this audience.
    ///
    /// Clients see `All Users` and `Clients`; lawyers and admins see
    /// `All Users` and `Lawyers`; superadmins see everything they can send.
    #[must_use]
    pub const fn is_visible_to(self, role: Role) -> bool {
        match (self, role) {
            (Self::AllUsers, _) | (_, Role::Superadmin) => true,
            (Self::Clients, Role::Client) => true,
            (Self::Lawyers, Role::Lawyer | Role::Admin) => true,
            (Self::Clients, Role::Lawyer | Role::Admin) | (Self::Lawyers, Role::Client) => false,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AllUsers => "All Users",
            Self::Lawyers => "Lawyers",
            Self::Clients => "Clients",
        }
    }
}

impl fmt::Display for NotificationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationTarget {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all users" | "all" | "all_users" => Ok(Self::AllUsers),
            "lawyers" => Ok(Self::Lawyers),
            "clients" => Ok(Self::Clients),
            other => Err(CoreError::Validation(format!(
                "unknown notification target '{other}'"
            ))),
        }
    }
}
