//! Position invariant: the current position names an existing snapshot.

use super::Invariant;
use crate::Session;

/// Invariant: `0 <= position < history.len()`.
pub struct PositionInBoundsInvariant;

impl Invariant<Session> for PositionInBoundsInvariant {
    fn holds(session: &Session) -> bool {
        session.position() < session.history().len()
    }

    fn description() -> &'static str {
        "Current position lies within history"
    }
}
