use harbor_core::enums::{MemberStatus, Role};
use serde::Serialize;

use super::MemberSummary;
use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::{parse_enum, parse_field};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ListResponse {
    members: Vec<MemberSummary>,
    total: usize,
}

pub fn handle(
    role: Option<&str>,
    status: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let role = role.map(|raw| parse_enum::<Role>(raw, "role")).transpose()?;
    let status = status
        .map(|raw| parse_field::<MemberStatus>(raw, "status"))
        .transpose()?;
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);

    let matching: Vec<_> = ctx
        .store
        .team_members()
        .iter()
        .filter(|member| role.is_none_or(|role| member.role() == role))
        .filter(|member| status.is_none_or(|status| member.status == status))
        .collect();

    output(
        &ListResponse {
            total: matching.len(),
            members: matching
                .into_iter()
                .take(limit)
                .map(MemberSummary::from)
                .collect(),
        },
        flags.format,
    )
}
