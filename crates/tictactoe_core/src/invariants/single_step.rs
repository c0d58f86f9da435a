//! Single-step invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::{Cell, Mark, Session, Snapshot, Square};

/// Invariant: snapshot *k* differs from snapshot *k-1* in exactly one cell.
///
/// That cell was empty, now holds the mark whose turn it was at *k-1*
/// (X on even, O on odd), and is recorded as snapshot *k*'s last move.
pub struct SingleStepInvariant;

impl SingleStepInvariant {
    /// Checks one transition of the history.
    pub fn step_holds(k: usize, before: &Snapshot, after: &Snapshot) -> bool {
        let changed: Vec<Cell> = Cell::ALL
            .iter()
            .copied()
            .filter(|cell| before.board().get(*cell) != after.board().get(*cell))
            .collect();

        let [cell] = changed.as_slice() else {
            return false;
        };

        before.board().is_empty(*cell)
            && after.board().get(*cell) == Square::Occupied(Mark::for_position(k - 1))
            && after.last_move() == Some(*cell)
    }
}

impl Invariant<Session> for SingleStepInvariant {
    fn holds(session: &Session) -> bool {
        session
            .history()
            .as_slice()
            .windows(2)
            .enumerate()
            .all(|(i, pair)| Self::step_holds(i + 1, &pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "Each snapshot fills exactly one cell with the mark to move"
    }
}
