use harbor_core::enums::MemberStatus;
use serde::Serialize;

use super::MemberSummary;
use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ReviewResponse {
    member: MemberSummary,
    revision: u64,
}

/// Approve or reject a member awaiting approval.
pub fn handle(
    id: u32,
    decision: MemberStatus,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if let Some(current) = ctx.store.team_member(id).map(|member| member.status)
        && current != MemberStatus::AwaitingApproval
    {
        anyhow::bail!("team member {id} is {current}, not awaiting approval");
    }

    let member = ctx.store.transition_member_status(id, decision)?;
    tracing::info!(id, status = %member.status, "team member reviewed");

    output(
        &ReviewResponse {
            member: MemberSummary::from(&member),
            revision: ctx.store.revision(),
        },
        flags.format,
    )
}
