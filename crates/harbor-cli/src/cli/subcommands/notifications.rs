use clap::{Args, Subcommand};

/// Notification commands.
#[derive(Clone, Debug, Subcommand)]
pub enum NotificationCommands {
    /// List the feed for a role (defaults to the logged-in actor's role).
    List {
        #[arg(long)]
        role: Option<String>,
    },
    /// Mark a notification read.
    Read { id: u32 },
    /// Soft-delete a notification.
    Delete { id: u32 },
    /// Broadcast a new notification.
    Send(SendArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SendArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub message: String,
    /// Audience: "All Users", Lawyers or Clients.
    #[arg(long, default_value = "All Users")]
    pub target: String,
}
