//! Core domain types for the board.

use super::position::Position;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Mark placed on the board.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Mark X (always moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Character used when rendering the square.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Mark::X) => 'X',
            Square::Occupied(Mark::O) => 'O',
        }
    }
}

/// Immutable 3x3 grid of squares.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    /// Squares indexed by `[row][col]`.
    cells: [[Square; Position::SIDE]; Position::SIDE],
}

impl Grid {
    /// Builds a grid by computing each square from its position.
    pub fn from_fn(mut square_at: impl FnMut(Position) -> Square) -> Self {
        Self {
            cells: std::array::from_fn(|row| {
                std::array::from_fn(|col| {
                    let pos = Position::ALL[row * Position::SIDE + col];
                    square_at(pos)
                })
            }),
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.cells[pos.row()][pos.col()]
    }

    /// Iterates over all squares in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Number of squares occupied by `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares()
            .filter(|s| *s == Square::Occupied(mark))
            .count()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::from_fn(|_| Square::Empty)
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, square) in cells.iter().enumerate() {
                write!(f, "{}", square.symbol())?;
                if col < Position::SIDE - 1 {
                    write!(f, "|")?;
                }
            }
            if row < Position::SIDE - 1 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
