//! Win detection logic.

use super::super::{Grid, Mark, Position, Square};
use tracing::instrument;

/// The 8 lines that win the game when one mark fills all three squares.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns every line completely filled by `mark`.
#[instrument(skip(grid))]
pub fn winning_lines(grid: &Grid, mark: Mark) -> Vec<[Position; 3]> {
    LINES
        .into_iter()
        .filter(|line| line.iter().all(|&pos| grid.get(pos) == Square::Occupied(mark)))
        .collect()
}

/// Checks whether `mark` has three in a row anywhere on the grid.
#[instrument(skip(grid))]
pub fn has_won(grid: &Grid, mark: Mark) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&pos| grid.get(pos) == Square::Occupied(mark)))
}
