use harbor_core::entities::Notification;
use harbor_core::errors::CoreError;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Clone, Copy)]
pub enum Change {
    Read,
    Delete,
}

#[derive(Debug, Serialize)]
struct UpdateResponse<'a> {
    notification: &'a Notification,
    revision: u64,
}

pub fn handle(id: u32, change: Change, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let applied = match change {
        Change::Read => ctx.store.mark_notification_read(id),
        Change::Delete => ctx.store.soft_delete_notification(id),
    };
    if !applied {
        return Err(CoreError::not_found("notification", id).into());
    }

    let notification = ctx
        .store
        .notification(id)
        .ok_or_else(|| CoreError::not_found("notification", id))?;
    output(
        &UpdateResponse {
            notification,
            revision: ctx.store.revision(),
        },
        flags.format,
    )
}
