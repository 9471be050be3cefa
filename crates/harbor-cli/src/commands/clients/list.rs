use harbor_core::enums::ClientStatus;
use serde::Serialize;

use super::ClientSummary;
use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_field;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ListResponse {
    clients: Vec<ClientSummary>,
    total: usize,
}

pub fn handle(
    status: Option<&str>,
    lawyer: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let status = status
        .map(|raw| parse_field::<ClientStatus>(raw, "status"))
        .transpose()?;
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);

    let matching: Vec<_> = ctx
        .store
        .clients()
        .iter()
        .filter(|client| status.is_none_or(|status| client.status == status))
        .filter(|client| lawyer.is_none_or(|id| client.lawyer_id == Some(id)))
        .collect();

    output(
        &ListResponse {
            total: matching.len(),
            clients: matching
                .into_iter()
                .take(limit)
                .map(|client| ClientSummary::new(client, &ctx.store))
                .collect(),
        },
        flags.format,
    )
}
