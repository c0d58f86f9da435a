//! Session status.

use crate::rules::Line;
use crate::{Cell, Mark};
use serde::{Deserialize, Serialize};

/// Status of the game at the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Moves can still be made.
    InProgress,
    /// `mark` completed `line`.
    Won {
        /// The winning mark.
        mark: Mark,
        /// The completed line.
        line: Line,
    },
    /// All nine cells filled with no winner.
    Draw,
}

impl Status {
    /// Whether no further moves are allowed.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Status::Won { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            Status::Won { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Whether `cell` is part of the winning line.
    pub fn highlights(&self, cell: Cell) -> bool {
        self.winning_line().is_some_and(|line| line.contains(cell))
    }
}
