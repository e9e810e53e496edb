//! Board construction and outcome classification.

use super::error::BoardError;
use super::invariants::{
    Invariant, InvariantSet, InvariantViolation, ReachabilityInvariants, SingleWinnerInvariant,
};
use super::position::Position;
use super::rules::{has_won, winning_lines};
use super::symbols::Symbols;
use super::types::{Grid, Mark};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Number of bytes in a board string.
pub const BOARD_LEN: usize = Position::SIDE * Position::SIDE;

/// Classification of a board.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Nobody has three in a row.
    #[display("No winner")]
    NoWinner,
    /// X has three in a row.
    #[display("X wins")]
    XWins,
    /// O has three in a row.
    #[display("O wins")]
    OWins,
    /// No legal sequence of alternating moves reaches this board.
    #[display("Unreachable state")]
    UnreachableState,
}

impl Outcome {
    /// Returns the winning mark, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::XWins => Some(Mark::X),
            Outcome::OWins => Some(Mark::O),
            Outcome::NoWinner | Outcome::UnreachableState => None,
        }
    }
}

/// A validated 3x3 board that can be classified.
///
/// The board is parsed once from a 9-byte string in row-major order
/// and is read-only afterwards.
///
/// # Example
///
/// ```
/// use strictly_board::{BoardEvaluator, Outcome};
///
/// let board = BoardEvaluator::new("XxxO.o...")?;
/// assert_eq!(board.evaluate(), Outcome::XWins);
/// # Ok::<(), strictly_board::BoardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardEvaluator {
    grid: Grid,
    input_len: usize,
}

impl BoardEvaluator {
    /// Parses a board using the default `x`/`o` symbols.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidInput`] unless `input` is exactly 9
    /// bytes long.
    #[instrument]
    pub fn new(input: &str) -> Result<Self, BoardError> {
        Self::with_symbols(input, &Symbols::default())
    }

    /// Parses a board using custom symbols.
    ///
    /// Each byte is one square. Bytes matching neither symbol (ignoring
    /// case) are empty squares, so every byte of a multi-byte character is
    /// an empty square.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidInput`] unless `input` is exactly 9
    /// bytes long.
    #[instrument(skip(symbols))]
    pub fn with_symbols(input: &str, symbols: &Symbols) -> Result<Self, BoardError> {
        let bytes = input.as_bytes();
        if bytes.len() != BOARD_LEN {
            debug!(length = bytes.len(), "Rejected board string");
            return Err(BoardError::InvalidInput {
                length: bytes.len(),
            });
        }

        let grid = Grid::from_fn(|pos| symbols.classify(char::from(bytes[pos.to_index()])));
        Ok(Self {
            grid,
            input_len: bytes.len(),
        })
    }

    /// Returns the parsed grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of bytes in the string the board was parsed from.
    pub fn input_len(&self) -> usize {
        self.input_len
    }

    /// Lines completed by `mark`.
    pub fn winning_lines(&self, mark: Mark) -> Vec<[Position; 3]> {
        winning_lines(&self.grid, mark)
    }

    /// Lists every reachability invariant the board violates.
    ///
    /// Empty exactly when [`evaluate`](Self::evaluate) does not return
    /// [`Outcome::UnreachableState`].
    #[instrument(skip(self))]
    pub fn violations(&self) -> Vec<InvariantViolation> {
        let mut violations = ReachabilityInvariants::check_all(&self.grid)
            .err()
            .unwrap_or_default();
        if !SingleWinnerInvariant::holds(&self.grid) {
            violations.push(InvariantViolation::new(
                SingleWinnerInvariant::description(),
            ));
        }
        violations
    }

    /// Classifies the board.
    #[instrument(skip(self))]
    pub fn evaluate(&self) -> Outcome {
        let violations = self.violations();
        if !violations.is_empty() {
            let x_count = self.grid.count(Mark::X);
            let o_count = self.grid.count(Mark::O);
            for violation in &violations {
                debug!(x_count, o_count, %violation, "Board is unreachable");
            }
            return Outcome::UnreachableState;
        }

        let outcome = if has_won(&self.grid, Mark::X) {
            Outcome::XWins
        } else if has_won(&self.grid, Mark::O) {
            Outcome::OWins
        } else {
            Outcome::NoWinner
        };

        debug!(%outcome, "Board evaluated");
        outcome
    }
}

impl std::str::FromStr for BoardEvaluator {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for BoardEvaluator {
    type Error = BoardError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl std::fmt::Display for BoardEvaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;

    #[test]
    fn test_rejects_wrong_lengths() {
        for input in ["", "xxooo", "........", "x...x...o.", "x.......o........x...."] {
            assert_eq!(
                BoardEvaluator::new(input),
                Err(BoardError::InvalidInput {
                    length: input.len()
                }),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_length_counts_bytes() {
        // 'é' is two bytes, so nine characters are ten bytes.
        assert_eq!(
            BoardEvaluator::new("é........"),
            Err(BoardError::InvalidInput { length: 10 })
        );

        let board = BoardEvaluator::new("é.......").expect("nine bytes");
        assert_eq!(board.input_len(), 9);
        assert!(board.grid().squares().all(|s| s == Square::Empty));
    }

    #[test]
    fn test_multi_byte_characters_fill_squares_bytewise() {
        // Each byte of 'é' takes a square and is empty; x and o shift along.
        let board = BoardEvaluator::new("éxo....x").expect("nine bytes");
        assert_eq!(board.grid().get(Position::TopLeft), Square::Empty);
        assert_eq!(board.grid().get(Position::TopCenter), Square::Empty);
        assert_eq!(board.grid().get(Position::TopRight), Square::Occupied(Mark::X));
        assert_eq!(board.grid().get(Position::MiddleLeft), Square::Occupied(Mark::O));
        assert_eq!(board.grid().get(Position::BottomRight), Square::Occupied(Mark::X));
    }

    #[test]
    fn test_evaluate_agrees_with_violations() {
        for input in [
            "xo.oxo..x",
            "OoOx.oxXx",
            "O.oOxo.o.",
            "xoxx.....",
            "xxoooxxxo",
            "XxxO.o...",
        ] {
            let board = BoardEvaluator::new(input).expect("valid board");
            assert_eq!(
                board.evaluate() == Outcome::UnreachableState,
                !board.violations().is_empty(),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_grid_is_row_major() {
        let board = BoardEvaluator::new("x...o...X").expect("valid board");
        assert_eq!(board.grid().get(Position::TopLeft), Square::Occupied(Mark::X));
        assert_eq!(board.grid().get(Position::Center), Square::Occupied(Mark::O));
        assert_eq!(board.grid().get(Position::BottomRight), Square::Occupied(Mark::X));
        assert_eq!(board.grid().get(Position::TopRight), Square::Empty);
    }

    #[test]
    fn test_x_win_with_equal_counts_is_unreachable() {
        let board = BoardEvaluator::new("xo.oxo..x").expect("valid board");
        assert_eq!(board.evaluate(), Outcome::UnreachableState);
        assert_eq!(board.violations().len(), 1);
    }

    #[test]
    fn test_double_win_is_unreachable() {
        let board = BoardEvaluator::new("OoOx.oxXx").expect("valid board");
        assert_eq!(board.evaluate(), Outcome::UnreachableState);
        assert!(!board.violations().is_empty());
    }

    #[test]
    fn test_double_win_reports_single_winner_violation() {
        let board = BoardEvaluator::new("OoOx.oxXx").expect("valid board");
        let descriptions: Vec<String> = board
            .violations()
            .into_iter()
            .map(|v| v.description)
            .collect();
        assert!(descriptions.contains(&SingleWinnerInvariant::description().to_string()));
        assert!(descriptions.contains(&"X cannot have won when O has as many marks".to_string()));
    }

    #[test]
    fn test_winning_lines() {
        let board = BoardEvaluator::new("xooxxoxox").expect("valid board");
        assert_eq!(board.evaluate(), Outcome::XWins);
        assert_eq!(
            board.winning_lines(Mark::X),
            vec![
                [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
                [Position::TopLeft, Position::Center, Position::BottomRight],
            ]
        );
        assert!(board.winning_lines(Mark::O).is_empty());
    }

    #[test]
    fn test_reachable_board_has_no_violations() {
        let board = BoardEvaluator::new("xxoooxxxo").expect("valid board");
        assert_eq!(board.evaluate(), Outcome::NoWinner);
        assert!(board.violations().is_empty());
    }

    #[test]
    fn test_custom_symbols() {
        let symbols = Symbols::new('a', 'b').expect("valid symbols");
        let board = BoardEvaluator::with_symbols("AaAbB....", &symbols).expect("valid board");
        assert_eq!(board.evaluate(), Outcome::XWins);

        let board = BoardEvaluator::with_symbols("xxx......", &symbols).expect("valid board");
        assert_eq!(board.evaluate(), Outcome::NoWinner);
    }

    #[test]
    fn test_from_str_and_try_from() {
        let parsed: BoardEvaluator = ".x.oOox.x".parse().expect("valid board");
        assert_eq!(parsed.evaluate(), Outcome::OWins);

        let converted = BoardEvaluator::try_from("xx").unwrap_err();
        assert_eq!(converted, BoardError::InvalidInput { length: 2 });
    }

    #[test]
    fn test_outcome_winner() {
        assert_eq!(Outcome::XWins.winner(), Some(Mark::X));
        assert_eq!(Outcome::OWins.winner(), Some(Mark::O));
        assert_eq!(Outcome::NoWinner.winner(), None);
        assert_eq!(Outcome::UnreachableState.winner(), None);
    }
}
