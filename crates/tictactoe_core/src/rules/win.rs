//! Win detection for tic-tac-toe.

use crate::{Board, Cell, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three cells that win the game when filled with the same mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Cell; 3]);

impl Line {
    /// The cells of the line, in order.
    pub fn cells(&self) -> [Cell; 3] {
        self.0
    }

    /// The board indices of the line, in order.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Cell::index)
    }

    /// Whether `cell` lies on this line.
    pub fn contains(&self, cell: Cell) -> bool {
        self.0.contains(&cell)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.indices();
        write!(f, "[{}, {}, {}]", a, b, c)
    }
}

/// The 8 winning lines, in the order they are checked.
pub const LINES: [Line; 8] = [
    // Rows
    Line([Cell::TopLeft, Cell::TopCenter, Cell::TopRight]),
    Line([Cell::MiddleLeft, Cell::Center, Cell::MiddleRight]),
    Line([Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight]),
    // Columns
    Line([Cell::TopLeft, Cell::MiddleLeft, Cell::BottomLeft]),
    Line([Cell::TopCenter, Cell::Center, Cell::BottomCenter]),
    Line([Cell::TopRight, Cell::MiddleRight, Cell::BottomRight]),
    // Diagonals
    Line([Cell::TopLeft, Cell::Center, Cell::BottomRight]),
    Line([Cell::TopRight, Cell::Center, Cell::BottomLeft]),
];

/// Classification of a single board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete.
    InProgress,
    /// `mark` filled `line`.
    Win {
        /// The winning mark.
        mark: Mark,
        /// The completed line.
        line: Line,
    },
}

impl Outcome {
    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::InProgress => None,
            Outcome::Win { mark, .. } => Some(*mark),
        }
    }
}

/// Evaluates the board for a completed line.
///
/// Returns the first line in [`LINES`] order whose three squares hold the
/// same mark. Boards that cannot occur in real play are still classified;
/// when several lines are complete the earliest one is reported.
#[instrument]
pub fn evaluate(board: &Board) -> Outcome {
    for line in LINES {
        let [a, b, c] = line.cells();
        if let Square::Occupied(mark) = board.get(a)
            && board.get(b) == Square::Occupied(mark)
            && board.get(c) == Square::Occupied(mark)
        {
            return Outcome::Win { mark, line };
        }
    }

    Outcome::InProgress
}
