pub mod get;
pub mod list;
pub mod set_status;

use harbor_core::entities::Client;
use harbor_core::enums::{CaseStatus, ClientStatus, Priority};
use harbor_store::EntityStore;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ClientCommands;
use crate::context::AppContext;

pub fn handle(
    action: &ClientCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ClientCommands::List { status, lawyer } => {
            list::handle(status.as_deref(), *lawyer, ctx, flags)
        }
        ClientCommands::Get { id } => get::handle(*id, ctx, flags),
        ClientCommands::SetStatus(args) => set_status::handle(args, ctx, flags),
    }
}

/// Password-free client row.
#[derive(Debug, Serialize)]
pub struct ClientSummary {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub status: ClientStatus,
    pub visa_type: String,
    pub stage: CaseStatus,
    pub priority: Priority,
    pub lawyer: Option<String>,
}

impl ClientSummary {
    pub fn new(client: &Client, store: &EntityStore) -> Self {
        Self {
            id: client.id(),
            name: client.account.name.clone(),
            email: client.account.email.clone(),
            status: client.status,
            visa_type: client.visa_type.clone(),
            stage: client.case.current_status,
            priority: client.case.priority,
            lawyer: client
                .lawyer_id
                .and_then(|id| store.team_member(id))
                .map(|member| member.account.name.clone()),
        }
    }
}
