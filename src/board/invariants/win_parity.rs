//! Win-parity invariants: the winner made the last move.

use super::super::rules::has_won;
use super::super::{Grid, Mark};
use super::Invariant;

/// Invariant: if X has won, O has not moved since.
///
/// X winning on its own move leaves X one mark ahead, so equal counts
/// after an X win cannot happen.
pub struct XWinParityInvariant;

impl Invariant<Grid> for XWinParityInvariant {
    fn holds(grid: &Grid) -> bool {
        !(has_won(grid, Mark::X) && grid.count(Mark::X) == grid.count(Mark::O))
    }

    fn description() -> &'static str {
        "X cannot have won when O has as many marks"
    }
}

/// Invariant: if O has won, X has not moved since.
pub struct OWinParityInvariant;

impl Invariant<Grid> for OWinParityInvariant {
    fn holds(grid: &Grid) -> bool {
        !(has_won(grid, Mark::O) && grid.count(Mark::X) == grid.count(Mark::O) + 1)
    }

    fn description() -> &'static str {
        "O cannot have won when X has moved again"
    }
}
