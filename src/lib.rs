//! Strictly Board - tic-tac-toe board validation and classification
//!
//! Parses a 9-character board string and decides whether nobody has won,
//! X has won, O has won, or the board could never arise from legal play.
//!
//! # Architecture
//!
//! - **Evaluator**: [`BoardEvaluator`] parses once and classifies into an [`Outcome`]
//! - **Rules**: win detection over the 8 lines ([`rules`])
//! - **Invariants**: reachability conditions as composable checks ([`invariants`])
//! - **Symbols**: which characters encode X and O, optionally loaded from TOML
//!
//! # Example
//!
//! ```
//! use strictly_board::{BoardEvaluator, Outcome};
//!
//! # fn example() -> Result<(), strictly_board::BoardError> {
//! assert_eq!(BoardEvaluator::new(".........")?.evaluate(), Outcome::NoWinner);
//! assert_eq!(BoardEvaluator::new(".x.oOox.x")?.evaluate(), Outcome::OWins);
//! assert_eq!(BoardEvaluator::new("xo.oxo..x")?.evaluate(), Outcome::UnreachableState);
//! assert!(BoardEvaluator::new("xxooo").is_err());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;

// Crate-level exports - Rule and invariant modules
pub use board::{invariants, rules};

// Crate-level exports - Board types
pub use board::{
    BOARD_LEN, BoardError, BoardEvaluator, ConfigError, Grid, Mark, Outcome, Position, Square,
    Symbols,
};
