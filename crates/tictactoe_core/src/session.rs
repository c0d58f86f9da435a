//! Game session: history, current position and move legality.

use crate::descriptor::{MoveDescriptor, MoveEntry};
use crate::error::{IllegalMove, SessionError};
use crate::invariants::{InvariantSet, SessionInvariants};
use crate::order::MoveOrder;
use crate::rules::{Outcome, evaluate};
use crate::snapshot::{History, Snapshot};
use crate::status::Status;
use crate::{Board, Cell, Mark};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// A game in progress together with its navigable history.
///
/// The mark to play is never stored; it is derived from the parity of
/// the current position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    history: History,
    position: usize,
    order: MoveOrder,
}

impl Session {
    /// Creates a new game with an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(MoveOrder::default())
    }

    /// Creates a new game whose move list starts in `order`.
    #[instrument]
    pub fn with_order(order: MoveOrder) -> Self {
        Self {
            history: History::new(),
            position: 0,
            order,
        }
    }

    /// Plays `indices` in turn from a fresh game.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by [`Session::play`].
    #[instrument(skip(indices))]
    pub fn replay(indices: impl IntoIterator<Item = usize>) -> Result<Self, SessionError> {
        let mut session = Self::new();
        for index in indices {
            session.play(index)?;
        }
        Ok(session)
    }

    /// The full history, game start first.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the snapshot currently shown.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Display order of the move list.
    pub fn order(&self) -> MoveOrder {
        self.order
    }

    /// The snapshot currently shown.
    pub fn current_snapshot(&self) -> &Snapshot {
        // position < history.len() holds for every reachable session.
        &self.history.as_slice()[self.position]
    }

    /// The board currently shown.
    pub fn current_board(&self) -> &Board {
        self.current_snapshot().board()
    }

    /// The mark that plays next from the current position.
    ///
    /// Still computed once the game is over, where it has no meaning.
    pub fn turn_to_move(&self) -> Mark {
        Mark::for_position(self.position)
    }

    /// Status of the game at the current position.
    ///
    /// A win is reported before a draw, so a full board with a
    /// completed line is `Won`.
    #[instrument(skip(self), fields(position = self.position))]
    pub fn status(&self) -> Status {
        match evaluate(self.current_board()) {
            Outcome::Win { mark, line } => Status::Won { mark, line },
            Outcome::InProgress if self.position >= 9 => Status::Draw,
            Outcome::InProgress => Status::InProgress,
        }
    }

    /// One-line status banner.
    pub fn status_line(&self) -> String {
        match self.status() {
            Status::Won { mark, .. } => format!("Winner: {}", mark),
            Status::Draw => "Draw".to_string(),
            Status::InProgress => format!("Next player: {}", self.turn_to_move()),
        }
    }

    /// Whether `cell` belongs to the winning line on the current board.
    pub fn is_winning_cell(&self, cell: Cell) -> bool {
        self.status().highlights(cell)
    }

    /// Plays the current turn's mark at cell `index` (0-8).
    ///
    /// Any snapshots after the current position are discarded before the
    /// new one is appended, and the position advances to it.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::IllegalMove`] if the game is over, the index
    /// is not a cell, or the cell is occupied on the current board. The
    /// session is unchanged in that case.
    #[instrument(skip(self), fields(position = self.position, mark = ?self.turn_to_move()))]
    pub fn play(&mut self, index: usize) -> Result<Status, SessionError> {
        if self.status().is_terminal() {
            debug!("Rejecting move on finished game");
            return Err(IllegalMove::GameOver.into());
        }

        let cell = Cell::from_index(index).ok_or(IllegalMove::OutOfBounds(index))?;

        if !self.current_board().is_empty(cell) {
            debug!(%cell, "Rejecting move on occupied cell");
            return Err(IllegalMove::SquareOccupied(cell).into());
        }

        let board = self.current_board().with_mark(cell, self.turn_to_move());
        self.position = self
            .history
            .branch_from(self.position, Snapshot::after_move(board, cell));

        debug_assert!(
            SessionInvariants::check_all(self).is_ok(),
            "session invariants violated after move"
        );

        let status = self.status();
        match status {
            Status::InProgress => debug!(%cell, "Move applied"),
            _ => info!(%cell, ?status, "Game finished"),
        }
        Ok(status)
    }

    /// Moves the current position to `target` without changing history.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::OutOfRange`] if `target` is not in history.
    #[instrument(skip(self), fields(from = self.position))]
    pub fn jump_to(&mut self, target: usize) -> Result<(), SessionError> {
        let len = self.history.len();
        if target >= len {
            warn!(len, "Jump target out of range");
            return Err(SessionError::OutOfRange { target, len });
        }
        self.position = target;
        debug!("Jumped");
        Ok(())
    }

    /// Flips the move list between ascending and descending.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) -> MoveOrder {
        self.order = self.order.toggle();
        self.order
    }

    /// Describes history `position`, or `None` if it does not exist.
    pub fn move_descriptor(&self, position: usize) -> Option<MoveDescriptor> {
        let snapshot = self.history.get(position)?;
        Some(match snapshot.last_move() {
            None => MoveDescriptor::GameStart,
            Some(cell) => MoveDescriptor::Move {
                number: position,
                row: cell.row(),
                col: cell.col(),
            },
        })
    }

    /// Entries for every history position, in the current display order.
    #[instrument(skip(self), fields(order = ?self.order))]
    pub fn move_list(&self) -> Vec<MoveEntry> {
        let mut entries: Vec<MoveEntry> = (0..self.history.len())
            .filter_map(|position| {
                self.move_descriptor(position).map(|descriptor| MoveEntry {
                    position,
                    descriptor,
                    is_current: position == self.position,
                })
            })
            .collect();

        if self.order == MoveOrder::Descending {
            entries.reverse();
        }
        entries
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let session = Session::new();
        assert_eq!(session.position(), 0);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.turn_to_move(), Mark::X);
        assert_eq!(session.status(), Status::InProgress);
        assert_eq!(session.status_line(), "Next player: X");
        assert_eq!(session.current_board(), &Board::new());
    }

    #[test]
    fn test_play_alternates_marks() {
        let mut session = Session::new();
        session.play(4).unwrap();
        assert_eq!(session.turn_to_move(), Mark::O);
        session.play(0).unwrap();
        assert_eq!(session.turn_to_move(), Mark::X);
        assert_eq!(
            session.current_board().get(Cell::Center).mark(),
            Some(Mark::X)
        );
        assert_eq!(
            session.current_board().get(Cell::TopLeft).mark(),
            Some(Mark::O)
        );
    }

    #[test]
    fn test_rejected_move_leaves_session_unchanged() {
        let mut session = Session::replay([4]).unwrap();
        let before = session.clone();

        assert_eq!(
            session.play(4),
            Err(SessionError::IllegalMove(IllegalMove::SquareOccupied(
                Cell::Center
            )))
        );
        assert_eq!(
            session.play(12),
            Err(SessionError::IllegalMove(IllegalMove::OutOfBounds(12)))
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_game_over_checked_before_bounds() {
        let mut session = Session::replay([0, 3, 1, 4, 2]).unwrap();
        assert_eq!(
            session.play(42),
            Err(SessionError::IllegalMove(IllegalMove::GameOver))
        );
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut session = Session::replay([0, 1]).unwrap();
        assert_eq!(
            session.jump_to(3),
            Err(SessionError::OutOfRange { target: 3, len: 3 })
        );
        assert_eq!(session.position(), 2);
        assert!(session.jump_to(2).is_ok());
    }

    #[test]
    fn test_winning_cells_highlighted() {
        let session = Session::replay([0, 3, 1, 4, 2]).unwrap();
        assert_eq!(session.status_line(), "Winner: X");
        assert!(session.is_winning_cell(Cell::TopLeft));
        assert!(session.is_winning_cell(Cell::TopRight));
        assert!(!session.is_winning_cell(Cell::MiddleLeft));
    }

    #[test]
    fn test_move_descriptor_for_index_zero() {
        let session = Session::replay([0]).unwrap();
        assert_eq!(session.move_descriptor(0), Some(MoveDescriptor::GameStart));
        assert_eq!(
            session.move_descriptor(1),
            Some(MoveDescriptor::Move {
                number: 1,
                row: 1,
                col: 1
            })
        );
        assert_eq!(session.move_descriptor(2), None);
    }
}
