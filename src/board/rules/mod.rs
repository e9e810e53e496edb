//! Rules for reading a finished or partial board.
//!
//! This module contains pure functions over a [`Grid`](super::Grid).
//! Rules are separated from grid storage so the reachability invariants
//! and the evaluator can compose them.

pub mod win;

pub use win::{LINES, has_won, winning_lines};
