//! Game rules for tic-tac-toe.
//!
//! Pure functions that classify a board. Rules know nothing about
//! history or turn order; draws depend on how many moves were played
//! and are decided by the session.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, Line, Outcome, evaluate};
