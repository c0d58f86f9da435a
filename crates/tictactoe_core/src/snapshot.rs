//! Board snapshots and the history they form.

use crate::{Board, Cell};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A board together with the move that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    last_move: Option<Cell>,
}

impl Snapshot {
    /// The empty board that starts every game.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    /// A snapshot produced by filling `cell`.
    pub fn after_move(board: Board, cell: Cell) -> Self {
        Self {
            board,
            last_move: Some(cell),
        }
    }

    /// The board at this point of the game.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The cell filled to reach this snapshot; `None` at game start.
    pub fn last_move(&self) -> Option<Cell> {
        self.last_move
    }
}

/// Ordered sequence of snapshots, starting with the empty board.
///
/// Never empty. New snapshots are only added through [`History::branch_from`],
/// which discards whatever followed the branching point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    /// A history holding only the starting snapshot.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::start()],
        }
    }

    /// Number of snapshots (always at least 1).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Snapshot at `position`, if it exists.
    pub fn get(&self, position: usize) -> Option<&Snapshot> {
        self.snapshots.get(position)
    }

    /// The most recent snapshot.
    pub fn last(&self) -> &Snapshot {
        // Constructed non-empty and never truncated below one element.
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// Iterates snapshots from game start onward.
    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }

    /// All snapshots as a slice.
    pub fn as_slice(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Drops every snapshot after `position`, then appends `snapshot`.
    ///
    /// Returns the index of the appended snapshot. `position` is clamped to
    /// the last existing snapshot.
    #[instrument(skip(self, snapshot), fields(len = self.snapshots.len()))]
    pub fn branch_from(&mut self, position: usize, snapshot: Snapshot) -> usize {
        let keep = (position + 1).min(self.snapshots.len());
        if keep < self.snapshots.len() {
            debug!(
                discarded = self.snapshots.len() - keep,
                "Discarding future snapshots"
            );
        }
        self.snapshots.truncate(keep);
        self.snapshots.push(snapshot);
        self.snapshots.len() - 1
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Snapshot;
    type IntoIter = std::slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
