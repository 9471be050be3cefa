use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Login(args) => commands::auth::login::handle(&args, ctx, flags),
        Commands::Logout => commands::auth::logout::handle(ctx, flags),
        Commands::Whoami => commands::auth::whoami::handle(ctx, flags),
        Commands::Open(args) => commands::navigate::handle_open(&args, ctx, flags),
        Commands::Page(args) => commands::navigate::handle_page(&args, ctx, flags),
        Commands::Clients { action } => commands::clients::handle(&action, ctx, flags),
        Commands::Team { action } => commands::team::handle(&action, ctx, flags),
        Commands::Notifications { action } => commands::notifications::handle(&action, ctx, flags),
        Commands::Flow { action } => commands::flow::handle(&action, ctx, flags).await,
        Commands::Schema { .. } | Commands::Offline { .. } | Commands::Health(_) | Commands::Smoke => {
            unreachable!("schema/offline/health/smoke are pre-dispatched in main")
        }
    }
}
