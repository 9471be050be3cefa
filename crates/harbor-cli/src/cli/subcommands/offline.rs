use clap::{Args, Subcommand};

/// Offline cache commands.
#[derive(Clone, Debug, Subcommand)]
pub enum OfflineCommands {
    /// Show which strategy a request would be served with.
    Classify(ClassifyArgs),
    /// Show the current cache name and precache list.
    Plan,
}

impl OfflineCommands {
    /// Whether the command reads `offline.*` configuration.
    #[must_use]
    pub const fn needs_config(&self) -> bool {
        matches!(self, Self::Plan)
    }
}

#[derive(Clone, Debug, Args)]
pub struct ClassifyArgs {
    pub method: String,
    pub path: String,
    /// `Accept` header value.
    #[arg(long)]
    pub accept: Option<String>,
    /// Treat the request as a top-level navigation.
    #[arg(long)]
    pub navigate: bool,
}
