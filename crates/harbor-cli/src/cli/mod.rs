use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `hbr` binary.
#[derive(Debug, Parser)]
#[command(name = "hbr", version, about = "Harbor - immigration law CRM core")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root path (defaults to the current directory)
    #[arg(short, long, global = true)]
    pub project: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            project: self.project.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::subcommands::{ClientCommands, FlowCommands, OfflineCommands};
    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["hbr", "--format", "table", "--limit", "10", "whoami"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(matches!(cli.command, Commands::Whoami));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["hbr", "smoke", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Smoke));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["hbr", "--format", "xml", "whoami"]).is_err());
    }

    #[test]
    fn login_requires_password() {
        assert!(Cli::try_parse_from(["hbr", "login", "a@b.example"]).is_err());
        let cli = Cli::try_parse_from(["hbr", "login", "a@b.example", "--password", "pw"])
            .expect("cli should parse");
        assert!(matches!(cli.command, Commands::Login(_)));
    }

    #[test]
    fn nested_subcommands_parse() {
        let cli = Cli::try_parse_from(["hbr", "clients", "set-status", "3", "Active"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Clients {
                action: ClientCommands::SetStatus(_)
            }
        ));

        let cli = Cli::try_parse_from(["hbr", "flow", "run", "case_timeline", "--input", "-"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Flow {
                action: FlowCommands::Run(_)
            }
        ));

        let cli = Cli::try_parse_from(["hbr", "offline", "classify", "GET", "/icons/a.png"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Offline {
                action: OfflineCommands::Classify(_)
            }
        ));
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["hbr", "--project", "/tmp/demo", "whoami"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.project.as_deref(), Some("/tmp/demo"));
    }
}
