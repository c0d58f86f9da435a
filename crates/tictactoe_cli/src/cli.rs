//! Command-line interface for the tic-tac-toe terminal frontend.

use clap::Parser;

/// Tic-tac-toe with a navigable move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal and revisit any earlier move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Start with the move list newest-first (overrides the settings file)
    #[arg(long)]
    pub descending: bool,

    /// Run semicolon-separated commands instead of reading stdin, e.g. "0;4;jump 1"
    #[arg(short, long)]
    pub script: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from(["tictactoe", "--descending", "-s", "0;4"]);
        assert!(cli.descending);
        assert_eq!(cli.script.as_deref(), Some("0;4"));
        assert!(cli.config.is_none());
    }
}
