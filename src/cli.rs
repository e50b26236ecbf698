use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "hub", about = "Immigration Hub: topic search, tips, and a help assistant (CLI + TUI)")]
pub struct Cli {
    /// Path to config file (default: ./hub.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Start TUI shell
    Run,
    /// Print the assistant's answer to a question
    Ask {
        /// Question text; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },
    /// Print catalog topics matching a query, one per line
    Search {
        query: String,
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
        let cli = Cli::parse_from(["hub"]);

        assert!(matches!(cli.command_or_default(), Command::Run));
    }

    #[test]
    fn parses_explicit_run_command() {
        let cli = Cli::parse_from(["hub", "run", "--config", "custom.toml"]);

        assert!(matches!(cli.command_or_default(), Command::Run));
        assert_eq!(
            cli.config
                .as_deref()
                .map(|p| p.to_string_lossy().to_string()),
            Some("custom.toml".to_owned())
        );
    }

    #[test]
    fn ask_collects_all_words() {
        let cli = Cli::parse_from(["hub", "ask", "how", "do", "I", "recycle?"]);

        match cli.command_or_default() {
            Command::Ask { words } => assert_eq!(words.join(" "), "how do I recycle?"),
            other => panic!("expected ask, got {other:?}"),
        }
    }

    #[test]
    fn ask_requires_a_question() {
        assert!(Cli::try_parse_from(["hub", "ask"]).is_err());
    }

    #[test]
    fn parses_search_query() {
        let cli = Cli::parse_from(["hub", "search", "solar"]);

        assert!(matches!(
            cli.command_or_default(),
            Command::Search { ref query } if query == "solar"
        ));
    }
}
