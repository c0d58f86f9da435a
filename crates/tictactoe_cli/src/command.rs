//! Commands accepted by the terminal frontend.

use derive_more::Display;
use std::str::FromStr;

/// One user command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play the current mark at a cell index (0-8).
    Play(usize),
    /// Show the board at a history position.
    Jump(usize),
    /// Flip the move list between ascending and descending.
    Order,
    /// Start a fresh game.
    New,
    /// Print the command summary.
    Help,
    /// Leave the program.
    Quit,
}

/// Input that could not be turned into a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CommandError {
    /// Nothing was typed.
    #[display("Empty command")]
    Empty,

    /// The first word is not a known command.
    #[display("Unknown command '{}' (type 'help')", _0)]
    Unknown(String),

    /// A numeric argument is missing.
    #[display("'{}' needs a number", _0)]
    MissingArgument(&'static str),

    /// A numeric argument did not parse as a non-negative integer.
    #[display("'{}' is not a valid number", _0)]
    InvalidNumber(String),

    /// Extra words followed a complete command.
    #[display("Unexpected input after command: '{}'", _0)]
    TrailingInput(String),
}

impl std::error::Error for CommandError {}

/// Summary printed by `help`.
pub const HELP: &str = "\
Commands:
  <n> | play <n>   place the current mark on cell n (0-8, row-major)
  jump <n>         show the board after move n (0 = game start)
  order            toggle the move list between ascending and descending
  new              start a new game
  help             show this message
  quit | exit      leave";

fn number(word: Option<&str>, command: &'static str) -> Result<usize, CommandError> {
    let word = word.ok_or(CommandError::MissingArgument(command))?;
    word.parse()
        .map_err(|_| CommandError::InvalidNumber(word.to_string()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let lowered = input.trim().to_lowercase();
        let mut words = lowered.split_whitespace();
        let head = words.next().ok_or(CommandError::Empty)?;

        let command = match head {
            "play" | "p" => Command::Play(number(words.next(), "play")?),
            "jump" | "j" => Command::Jump(number(words.next(), "jump")?),
            "order" | "o" => Command::Order,
            "new" | "n" => Command::New,
            "help" | "h" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other if other.starts_with(|c: char| c.is_ascii_digit() || c == '-') => {
                Command::Play(number(Some(other), "play")?)
            }
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        let rest: Vec<&str> = words.collect();
        if !rest.is_empty() {
            return Err(CommandError::TrailingInput(rest.join(" ")));
        }
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("play 4".parse(), Ok(Command::Play(4)));
        assert_eq!("  7 ".parse(), Ok(Command::Play(7)));
        assert_eq!("JUMP 0".parse(), Ok(Command::Jump(0)));
        assert_eq!("order".parse(), Ok(Command::Order));
        assert_eq!("new".parse(), Ok(Command::New));
        assert_eq!("?".parse(), Ok(Command::Help));
        assert_eq!("exit".parse(), Ok(Command::Quit));
    }

    #[test]
    fn test_out_of_range_cell_still_parses() {
        // Range checks belong to the session.
        assert_eq!("play 9".parse(), Ok(Command::Play(9)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "jump".parse::<Command>(),
            Err(CommandError::MissingArgument("jump"))
        );
        assert_eq!(
            "jump -1".parse::<Command>(),
            Err(CommandError::InvalidNumber("-1".to_string()))
        );
        assert_eq!(
            "-3".parse::<Command>(),
            Err(CommandError::InvalidNumber("-3".to_string()))
        );
        assert_eq!(
            "dance".parse::<Command>(),
            Err(CommandError::Unknown("dance".to_string()))
        );
        assert_eq!(
            "play 1 2".parse::<Command>(),
            Err(CommandError::TrailingInput("2".to_string()))
        );
    }
}
