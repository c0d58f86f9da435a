//! Tic-tac-toe rules engine and game session with navigable history.
//!
//! # Architecture
//!
//! - **Rules**: pure classification of a board (win lines, full board)
//! - **Session**: ordered board snapshots, the current position, move
//!   legality, status and the move list shown to players
//! - **Invariants**: properties every reachable session satisfies
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Mark, Session, Status};
//!
//! let mut session = Session::new();
//! for index in [0, 1, 4, 3, 8] {
//!     session.play(index)?;
//! }
//! assert_eq!(session.status().winner(), Some(Mark::X));
//!
//! // Step back and play a different continuation.
//! session.jump_to(2)?;
//! session.play(2)?;
//! assert_eq!(session.history().len(), 4);
//! assert_eq!(session.status(), Status::InProgress);
//! # Ok::<(), tictactoe_core::SessionError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cell;
mod descriptor;
mod error;
mod order;
mod session;
mod snapshot;
mod status;
mod types;

pub mod invariants;
pub mod rules;

pub use cell::Cell;
pub use descriptor::{MoveDescriptor, MoveEntry};
pub use error::{IllegalMove, SessionError};
pub use invariants::{Invariant, InvariantSet, InvariantViolation, SessionInvariants};
pub use order::MoveOrder;
pub use rules::{Line, Outcome, evaluate};
pub use session::Session;
pub use snapshot::{History, Snapshot};
pub use status::Status;
pub use types::{Board, Mark, Square};
