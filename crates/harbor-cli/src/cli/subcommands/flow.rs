use clap::{Args, Subcommand};

/// Generative-AI flow commands.
#[derive(Clone, Debug, Subcommand)]
pub enum FlowCommands {
    /// List available flows.
    List,
    /// Run a flow on JSON input.
    Run(FlowRunArgs),
}

#[derive(Clone, Debug, Args)]
pub struct FlowRunArgs {
    /// Flow name, e.g. `case_timeline`.
    pub name: String,
    /// JSON input file, or `-` for stdin.
    #[arg(long)]
    pub input: String,
}
