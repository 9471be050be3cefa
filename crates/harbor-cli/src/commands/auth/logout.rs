use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct LogoutResponse {
    logged_out: bool,
    email: Option<String>,
}

pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let email = ctx.session.current_actor().map(|actor| actor.email().to_string());
    ctx.session.logout();
    ctx.persist_session()?;

    output(
        &LogoutResponse {
            logged_out: email.is_some(),
            email,
        },
        flags.format,
    )
}
