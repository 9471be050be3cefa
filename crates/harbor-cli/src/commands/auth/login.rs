use harbor_auth::AuthError;
use harbor_core::entities::ActorProfile;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LoginArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct LoginResponse {
    actor: ActorProfile,
    home: &'static str,
    session_path: String,
}

pub fn handle(args: &LoginArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let actor = ctx.session.login(&ctx.store, &args.email, &args.password);
    ctx.persist_session()?;

    let Some(actor) = actor else {
        return Err(AuthError::InvalidCredentials.into());
    };

    output(
        &LoginResponse {
            home: actor.role().home_path(),
            actor: actor.profile(),
            session_path: ctx.session_file.path().display().to_string(),
        },
        flags.format,
    )
}
