use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "ethdeck", about = "Terminal Ethereum dashboard (CLI + TUI)")]
pub struct Cli {
    /// Path to config file (default: ./ethdeck.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Start the TUI dashboard
    Run,
    /// Print the current board message and exit
    Read,
    /// Write a message to the board and wait for confirmation
    Send {
        /// The message to store, passed to the contract exactly as given
        message: String,
    },
}

impl Cli {
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Run)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Command};

    #[test]
    fn defaults_to_run_when_command_is_missing() {
        let cli = Cli::parse_from(["ethdeck"]);

        assert!(matches!(cli.command_or_default(), Command::Run));
    }

    #[test]
    fn parses_explicit_run_command() {
        let cli = Cli::parse_from(["ethdeck", "run", "--config", "custom.toml"]);

        assert!(matches!(cli.command_or_default(), Command::Run));
        assert_eq!(
            cli.config
                .as_deref()
                .map(|p| p.to_string_lossy().to_string()),
            Some("custom.toml".to_owned())
        );
    }

    #[test]
    fn send_keeps_the_message_verbatim() {
        let cli = Cli::parse_from(["ethdeck", "send", "  gm world  "]);

        match cli.command_or_default() {
            Command::Send { message } => assert_eq!(message, "  gm world  "),
            other => panic!("expected send, parsed {other:?}"),
        }
    }

    #[test]
    fn read_needs_no_arguments() {
        let cli = Cli::parse_from(["ethdeck", "read"]);

        assert!(matches!(cli.command_or_default(), Command::Read));
    }
}
