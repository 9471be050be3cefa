use clap::{Args, Subcommand};

/// Client record commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ClientCommands {
    /// List clients.
    List {
        /// Only clients with this status (Active, On-hold, Closed, Blocked).
        #[arg(long)]
        status: Option<String>,
        /// Only clients assigned to this lawyer id.
        #[arg(long)]
        lawyer: Option<u32>,
    },
    /// Get a client by id.
    Get { id: u32 },
    /// Change a client's account status.
    SetStatus(SetStatusArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SetStatusArgs {
    pub id: u32,
    pub status: String,
}
