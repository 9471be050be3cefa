use harbor_core::entities::ActorProfile;
use harbor_store::StoreOrigin;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct WhoamiResponse {
    authenticated: bool,
    actor: Option<ActorProfile>,
    home: Option<&'static str>,
    data_source: StoreOrigin,
    session_path: String,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let actor = ctx.session.current_actor();
    output(
        &WhoamiResponse {
            authenticated: actor.is_some(),
            actor: actor.map(harbor_core::entities::Actor::profile),
            home: actor.map(|actor| actor.role().home_path()),
            data_source: ctx.origin,
            session_path: ctx.session_file.path().display().to_string(),
        },
        flags.format,
    )
}
