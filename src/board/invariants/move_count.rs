//! Move-count invariants: X moves first and turns alternate.

use super::super::{Grid, Mark};
use super::Invariant;

/// Invariant: X has at most one more mark than O.
pub struct XLeadInvariant;

impl Invariant<Grid> for XLeadInvariant {
    fn holds(grid: &Grid) -> bool {
        grid.count(Mark::X) < grid.count(Mark::O) + 2
    }

    fn description() -> &'static str {
        "X has at most one more mark than O"
    }
}

/// Invariant: O never has more marks than X.
pub struct OLagInvariant;

impl Invariant<Grid> for OLagInvariant {
    fn holds(grid: &Grid) -> bool {
        grid.count(Mark::O) < grid.count(Mark::X) + 1
    }

    fn description() -> &'static str {
        "O never has more marks than X"
    }
}
