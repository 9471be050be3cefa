use harbor_core::entities::Notification;
use harbor_core::enums::Role;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ListResponse<'a> {
    role: Option<Role>,
    unread: usize,
    notifications: Vec<&'a Notification>,
}

/// Feed for `--role`, else the logged-in actor's role, else every
/// notification that is not deleted.
pub fn handle(role: Option<&str>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let role = match role {
        Some(raw) => Some(parse_enum::<Role>(raw, "role")?),
        None => ctx.session.current_actor().map(harbor_core::entities::Actor::role),
    };
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);

    let feed: Vec<&Notification> = match role {
        Some(role) => ctx.store.visible_notifications(role),
        None => ctx
            .store
            .notifications()
            .iter()
            .filter(|n| !n.is_deleted)
            .collect(),
    };

    output(
        &ListResponse {
            role,
            unread: feed.iter().filter(|n| !n.is_read).count(),
            notifications: feed.into_iter().take(limit).collect(),
        },
        flags.format,
    )
}
