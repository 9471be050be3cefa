use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    ClientCommands, FlowCommands, NotificationCommands, OfflineCommands, SchemaCommands,
    TeamCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Log in with an email and password; the session is persisted.
    Login(LoginArgs),
    /// Forget the persisted session.
    Logout,
    /// Show the logged-in actor.
    Whoami,
    /// Evaluate the route guard for a path and follow redirects.
    Open(OpenArgs),
    /// Render a dashboard page for the logged-in actor.
    Page(PageArgs),
    /// Client records.
    Clients {
        #[command(subcommand)]
        action: ClientCommands,
    },
    /// Team members.
    Team {
        #[command(subcommand)]
        action: TeamCommands,
    },
    /// Notification feed.
    Notifications {
        #[command(subcommand)]
        action: NotificationCommands,
    },
    /// Generative-AI flows.
    Flow {
        #[command(subcommand)]
        action: FlowCommands,
    },
    /// Registered JSON schemas.
    Schema {
        #[command(subcommand)]
        action: SchemaCommands,
    },
    /// Offline cache strategy.
    Offline {
        #[command(subcommand)]
        action: OfflineCommands,
    },
    /// Check the workspace builds and is configured.
    Health(HealthArgs),
    /// Exercise login, guard, pages and fallback flows against seed data.
    Smoke,
}

/// Arguments for `hbr login`.
#[derive(Clone, Debug, Args)]
pub struct LoginArgs {
    pub email: String,
    #[arg(long)]
    pub password: String,
}

/// Arguments for `hbr open`.
#[derive(Clone, Debug, Args)]
pub struct OpenArgs {
    /// Route path, e.g. `/lawyer/dashboard`.
    pub path: String,
}

/// Arguments for `hbr page`.
#[derive(Clone, Debug, Args)]
pub struct PageArgs {
    /// Page key, e.g. `case` or `leads`. Defaults to the role's landing page.
    pub key: Option<String>,
}

/// Arguments for `hbr health`.
#[derive(Clone, Debug, Args)]
pub struct HealthArgs {
    /// Skip the `cargo check` build step.
    #[arg(long)]
    pub skip_build: bool,
}
