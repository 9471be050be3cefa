use clap::Subcommand;

/// Team member commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TeamCommands {
    /// List team members.
    List {
        /// Only members with this role (lawyer, admin, superadmin).
        #[arg(long)]
        role: Option<String>,
        /// Only members with this status.
        #[arg(long)]
        status: Option<String>,
    },
    /// Approve a member awaiting approval.
    Approve { id: u32 },
    /// Reject a member awaiting approval.
    Reject { id: u32 },
}
