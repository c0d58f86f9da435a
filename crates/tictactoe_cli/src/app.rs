//! Interactive loop driving a [`Session`] from text commands.

use crate::command::{Command, HELP};
use crate::config::Settings;
use crate::render;
use std::io::{BufRead, Write};
use tictactoe_core::{Session, SessionError};
use tracing::{debug, info, instrument};

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Redraw the screen.
    Redraw,
    /// Print a short notice, then redraw.
    Notice(String),
    /// Print the help text.
    Help,
    /// Stop reading input.
    Quit,
}

/// Frontend state: the session plus display settings.
#[derive(Debug, Clone)]
pub struct App {
    session: Session,
    settings: Settings,
}

impl App {
    /// Creates an app with a fresh game.
    #[instrument]
    pub fn new(settings: Settings) -> Self {
        Self {
            session: Session::with_order(*settings.move_order()),
            settings,
        }
    }

    /// The game being played.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Applies one command to the session.
    ///
    /// Rejected moves and jumps leave the game as it was.
    #[instrument(skip(self))]
    pub fn apply(&mut self, command: Command) -> Reply {
        let result = match command {
            Command::Play(index) => self.session.play(index).map(|_| ()),
            Command::Jump(target) => self.session.jump_to(target),
            Command::Order => {
                self.session.toggle_order();
                Ok(())
            }
            Command::New => {
                info!("Starting a new game");
                self.session = Session::with_order(self.session.order());
                Ok(())
            }
            Command::Help => return Reply::Help,
            Command::Quit => return Reply::Quit,
        };

        match result {
            Ok(()) => Reply::Redraw,
            Err(err) => {
                debug!(%err, "Command ignored");
                Reply::Notice(notice(&err))
            }
        }
    }

    /// Reads commands line by line until input ends or `quit`.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> std::io::Result<()> {
        writeln!(output, "{}", render::screen(&self.session, &self.settings))?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    debug!(%err, input = %line, "Unparsable command");
                    writeln!(output, "{}", err)?;
                    continue;
                }
            };

            match self.apply(command) {
                Reply::Quit => break,
                Reply::Help => writeln!(output, "{}", HELP)?,
                Reply::Notice(text) => {
                    writeln!(output, "{}", text)?;
                    writeln!(output, "{}", render::screen(&self.session, &self.settings))?;
                }
                Reply::Redraw => {
                    writeln!(output, "{}", render::screen(&self.session, &self.settings))?
                }
            }
        }

        output.flush()
    }
}

fn notice(err: &SessionError) -> String {
    format!("Ignored: {}", err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::{Mark, MoveOrder, Status};

    fn run_script(script: &str) -> (App, String) {
        let mut app = App::new(Settings::default());
        let mut out = Vec::new();
        app.run(script.as_bytes(), &mut out).unwrap();
        (app, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_script_plays_to_win() {
        let (app, out) = run_script("0\n1\n4\n3\n8\n");
        assert_eq!(app.session().status().winner(), Some(Mark::X));
        assert!(out.contains("Winner: X"));
    }

    #[test]
    fn test_rejected_move_is_reported_and_ignored() {
        let (app, out) = run_script("4\n4\nplay 9\n");
        assert_eq!(app.session().position(), 1);
        assert!(out.contains("Ignored: Illegal move: Center is already occupied"));
        assert!(out.contains("Ignored: Illegal move: Cell index 9 is out of bounds"));
    }

    #[test]
    fn test_parse_error_does_not_stop_loop() {
        let (app, out) = run_script("dance\n2\n");
        assert!(out.contains("Unknown command 'dance'"));
        assert_eq!(app.session().position(), 1);
    }

    #[test]
    fn test_quit_stops_reading() {
        let (app, _) = run_script("0\nquit\n1\n");
        assert_eq!(app.session().history().len(), 2);
    }

    #[test]
    fn test_new_keeps_order() {
        let mut app = App::new(Settings::default());
        assert_eq!(app.apply(Command::Play(0)), Reply::Redraw);
        assert_eq!(app.apply(Command::Order), Reply::Redraw);
        assert_eq!(app.apply(Command::New), Reply::Redraw);
        assert_eq!(app.session().history().len(), 1);
        assert_eq!(app.session().order(), MoveOrder::Descending);
        assert_eq!(app.session().status(), Status::InProgress);
    }

    #[test]
    fn test_jump_out_of_range_notice() {
        let mut app = App::new(Settings::default());
        assert_eq!(
            app.apply(Command::Jump(2)),
            Reply::Notice("Ignored: Position 2 is out of range (history has 1 entries)".to_string())
        );
        assert_eq!(app.apply(Command::Help), Reply::Help);
    }
}
