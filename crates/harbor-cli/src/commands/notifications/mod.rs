pub mod list;
pub mod send;
pub mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::NotificationCommands;
use crate::context::AppContext;

pub fn handle(
    action: &NotificationCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        NotificationCommands::List { role } => list::handle(role.as_deref(), ctx, flags),
        NotificationCommands::Read { id } => update::handle(*id, update::Change::Read, ctx, flags),
        NotificationCommands::Delete { id } => {
            update::handle(*id, update::Change::Delete, ctx, flags)
        }
        NotificationCommands::Send(args) => send::handle(args, ctx, flags),
    }
}
