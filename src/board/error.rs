//! Error types for board construction and symbol configuration.

use derive_more::{Display, Error};
use tracing::instrument;

/// Error returned when a board cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardError {
    /// The input was not exactly 9 bytes long.
    #[display("Invalid board: expected 9 bytes, got {length}")]
    InvalidInput {
        /// Number of bytes actually supplied.
        length: usize,
    },
}

impl std::error::Error for BoardError {}

/// Symbol configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
