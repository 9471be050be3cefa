use harbor_core::entities::Notification;
use harbor_core::enums::NotificationTarget;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::notifications::SendArgs;
use crate::commands::shared::parse::parse_field;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SendResponse {
    notification: Notification,
    revision: u64,
}

pub fn handle(args: &SendArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let target: NotificationTarget = parse_field(&args.target, "target")?;
    if args.title.trim().is_empty() {
        anyhow::bail!("notification title must not be empty");
    }

    let notification = Notification {
        id: ctx.store.next_notification_id()?,
        title: args.title.trim().to_string(),
        message: args.message.clone(),
        target,
        date: chrono::Local::now().date_naive(),
        is_read: false,
        is_deleted: false,
    };
    ctx.store.add_notification(notification.clone());

    output(
        &SendResponse {
            notification,
            revision: ctx.store.revision(),
        },
        flags.format,
    )
}
