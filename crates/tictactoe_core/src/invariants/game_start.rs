//! Game start invariant: history begins with the empty board.

use super::Invariant;
use crate::{Board, Session};

/// Invariant: snapshot 0 is the empty board and records no move.
pub struct GameStartInvariant;

impl Invariant<Session> for GameStartInvariant {
    fn holds(session: &Session) -> bool {
        session
            .history()
            .get(0)
            .is_some_and(|start| start.board() == &Board::new() && start.last_move().is_none())
    }

    fn description() -> &'static str {
        "History starts with the empty board and no last move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_through_play() {
        let mut session = Session::new();
        assert!(GameStartInvariant::holds(&session));
        session.play(0).unwrap();
        session.play(8).unwrap();
        assert!(GameStartInvariant::holds(&session));
    }
}
