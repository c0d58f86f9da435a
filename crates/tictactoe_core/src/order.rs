//! Display order of the move list.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Whether the move list runs oldest-first or newest-first.
///
/// Presentation only: flipping it never touches history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl MoveOrder {
    /// Returns the display label for this order.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }

    /// Toggles between `Ascending` and `Descending`.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_and_returns() {
        assert_eq!(MoveOrder::default(), MoveOrder::Ascending);
        assert_eq!(MoveOrder::Ascending.toggle(), MoveOrder::Descending);
        assert_eq!(MoveOrder::Ascending.toggle().toggle(), MoveOrder::Ascending);
    }
}
