pub mod list;
pub mod review;

use harbor_core::entities::TeamMember;
use harbor_core::enums::{MemberStatus, Role};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TeamCommands;
use crate::context::AppContext;

pub fn handle(action: &TeamCommands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        TeamCommands::List { role, status } => {
            list::handle(role.as_deref(), status.as_deref(), ctx, flags)
        }
        TeamCommands::Approve { id } => review::handle(*id, MemberStatus::Active, ctx, flags),
        TeamCommands::Reject { id } => review::handle(*id, MemberStatus::Rejected, ctx, flags),
    }
}

/// Password-free team member row.
#[derive(Debug, Serialize)]
pub struct MemberSummary {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub title: String,
    pub role: Role,
    pub status: MemberStatus,
    pub onboarding_complete: Option<bool>,
    pub billing_set_up: Option<bool>,
}

impl From<&TeamMember> for MemberSummary {
    fn from(member: &TeamMember) -> Self {
        let profile = member.lawyer_profile();
        Self {
            id: member.id(),
            name: member.account.name.clone(),
            email: member.account.email.clone(),
            title: member.title.clone(),
            role: member.role(),
            status: member.status,
            onboarding_complete: profile.map(|p| p.onboarding_complete),
            billing_set_up: profile.map(|p| p.billing_set_up),
        }
    }
}
