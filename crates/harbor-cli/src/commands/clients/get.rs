use harbor_core::entities::CaseSummary;
use harbor_core::errors::CoreError;
use serde::Serialize;

use super::ClientSummary;
use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct GetResponse {
    #[serde(flatten)]
    client: ClientSummary,
    phone: Option<String>,
    country: String,
    joined_date: chrono::NaiveDate,
    case: CaseSummary,
    progress_percent: u8,
}

pub fn handle(id: u32, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = ctx
        .store
        .client(id)
        .ok_or_else(|| CoreError::not_found("client", id))?;

    output(
        &GetResponse {
            client: ClientSummary::new(client, &ctx.store),
            phone: client.phone.clone(),
            country: client.country.clone(),
            joined_date: client.joined_date,
            case: client.case.clone(),
            progress_percent: client.case.current_status.progress_percent(),
        },
        flags.format,
    )
}
