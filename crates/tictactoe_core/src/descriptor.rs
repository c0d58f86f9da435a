//! Human-facing descriptions of history positions.

use serde::{Deserialize, Serialize};

/// What happened at one history position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveDescriptor {
    /// Position 0, before any move.
    GameStart,
    /// A move, with 1-based board coordinates.
    Move {
        /// History position of the move.
        number: usize,
        /// 1-based row of the filled cell.
        row: usize,
        /// 1-based column of the filled cell.
        col: usize,
    },
}

impl MoveDescriptor {
    /// The `(row, col)` pair, absent at game start.
    pub fn coordinates(&self) -> Option<(usize, usize)> {
        match self {
            MoveDescriptor::GameStart => None,
            MoveDescriptor::Move { row, col, .. } => Some((*row, *col)),
        }
    }
}

impl std::fmt::Display for MoveDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveDescriptor::GameStart => write!(f, "Go to game start"),
            MoveDescriptor::Move { number, row, col } => {
                write!(f, "Go to move #{} (row: {}, col: {})", number, row, col)
            }
        }
    }
}

/// One line of the rendered move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveEntry {
    /// History position this entry jumps to.
    pub position: usize,
    /// What the position represents.
    pub descriptor: MoveDescriptor,
    /// Whether this is the position currently shown.
    pub is_current: bool,
}

impl std::fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.is_current {
            return write!(f, "{}", self.descriptor);
        }
        write!(f, "You are at #{}", self.position)?;
        if let Some((row, col)) = self.descriptor.coordinates() {
            write!(f, " (row: {}, col: {})", row, col)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_text() {
        assert_eq!(MoveDescriptor::GameStart.to_string(), "Go to game start");
        let mv = MoveDescriptor::Move {
            number: 3,
            row: 1,
            col: 2,
        };
        assert_eq!(mv.to_string(), "Go to move #3 (row: 1, col: 2)");
    }

    #[test]
    fn test_current_entry_text() {
        let start = MoveEntry {
            position: 0,
            descriptor: MoveDescriptor::GameStart,
            is_current: true,
        };
        assert_eq!(start.to_string(), "You are at #0");

        let entry = MoveEntry {
            position: 2,
            descriptor: MoveDescriptor::Move {
                number: 2,
                row: 2,
                col: 2,
            },
            is_current: true,
        };
        assert_eq!(entry.to_string(), "You are at #2 (row: 2, col: 2)");
    }
}
