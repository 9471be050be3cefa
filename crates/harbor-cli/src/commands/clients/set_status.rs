use harbor_core::enums::ClientStatus;
use serde::Serialize;

use super::ClientSummary;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::clients::SetStatusArgs;
use crate::commands::shared::parse::parse_field;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SetStatusResponse {
    client: ClientSummary,
    revision: u64,
}

pub fn handle(args: &SetStatusArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status: ClientStatus = parse_field(&args.status, "status")?;
    let client = ctx.store.set_client_status(args.id, status)?;

    output(
        &SetStatusResponse {
            client: ClientSummary::new(&client, &ctx.store),
            revision: ctx.store.revision(),
        },
        flags.format,
    )
}
