//! Single-winner invariant: the game stops at the first completed line.

use super::super::rules::has_won;
use super::super::{Grid, Mark};
use super::Invariant;

/// Invariant: X and O cannot both have three in a row.
pub struct SingleWinnerInvariant;

impl Invariant<Grid> for SingleWinnerInvariant {
    fn holds(grid: &Grid) -> bool {
        !(has_won(grid, Mark::X) && has_won(grid, Mark::O))
    }

    fn description() -> &'static str {
        "X and O cannot both have won"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Position, Square};

    #[test]
    fn test_both_rows_violate() {
        let grid = Grid::from_fn(|pos| match pos.row() {
            0 => Square::Occupied(Mark::O),
            2 => Square::Occupied(Mark::X),
            _ => Square::Empty,
        });
        assert!(!SingleWinnerInvariant::holds(&grid));
    }

    #[test]
    fn test_one_winner_holds() {
        let grid = Grid::from_fn(|pos| match pos {
            Position::TopLeft | Position::Center | Position::BottomRight => {
                Square::Occupied(Mark::X)
            }
            _ => Square::Empty,
        });
        assert!(SingleWinnerInvariant::holds(&grid));
    }
}
