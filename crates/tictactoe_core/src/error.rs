//! Errors raised by session operations.

use crate::Cell;

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMove {
    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The index does not name a board cell.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The cell is already filled on the current board.
    #[display("{} is already occupied", _0)]
    SquareOccupied(Cell),
}

impl std::error::Error for IllegalMove {}

/// Error returned by [`Session`](crate::Session) mutators.
///
/// The session is left unchanged whenever one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// A move was rejected.
    #[display("Illegal move: {}", _0)]
    IllegalMove(IllegalMove),

    /// A jump targeted a position that is not in history.
    #[display("Position {} is out of range (history has {} entries)", target, len)]
    OutOfRange {
        /// The requested position.
        target: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

impl std::error::Error for SessionError {}

impl SessionError {
    /// Whether this is a rejected move.
    pub fn is_illegal_move(&self) -> bool {
        matches!(self, SessionError::IllegalMove(_))
    }
}

impl From<IllegalMove> for SessionError {
    fn from(reason: IllegalMove) -> Self {
        SessionError::IllegalMove(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = SessionError::from(IllegalMove::SquareOccupied(Cell::Center));
        assert_eq!(err.to_string(), "Illegal move: Center is already occupied");
        assert!(err.is_illegal_move());

        let err = SessionError::OutOfRange { target: 5, len: 3 };
        assert_eq!(
            err.to_string(),
            "Position 5 is out of range (history has 3 entries)"
        );
        assert!(!err.is_illegal_move());
    }
}
