mod error;
mod evaluator;
mod position;
mod symbols;
mod types;

pub mod invariants;
pub mod rules;

pub use error::{BoardError, ConfigError};
pub use evaluator::{BOARD_LEN, BoardEvaluator, Outcome};
pub use position::Position;
pub use symbols::Symbols;
pub use types::{Grid, Mark, Square};
