pub mod list;
pub mod run;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FlowCommands;
use crate::context::AppContext;

pub async fn handle(action: &FlowCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        FlowCommands::List => list::handle(ctx, flags),
        FlowCommands::Run(args) => run::handle(args, ctx, flags).await,
    }
}
