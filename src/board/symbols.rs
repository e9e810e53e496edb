//! Characters that encode each mark in a board string.

use super::error::ConfigError;
use super::types::{Mark, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Mapping from input characters to marks.
///
/// Symbols are stored lowercase and matched case-insensitively. Any
/// character that is neither symbol parses as an empty square.
/// Deserializing goes through [`Symbols::new`], so the same checks apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(try_from = "RawSymbols")]
pub struct Symbols {
    /// Character for [`Mark::X`], the mark that moves first.
    first: char,

    /// Character for [`Mark::O`].
    second: char,
}

/// Unvalidated symbols as they appear in a config file.
#[derive(Debug, Deserialize)]
struct RawSymbols {
    #[serde(default = "default_first")]
    first: char,
    #[serde(default = "default_second")]
    second: char,
}

impl TryFrom<RawSymbols> for Symbols {
    type Error = ConfigError;

    fn try_from(raw: RawSymbols) -> Result<Self, Self::Error> {
        Self::new(raw.first, raw.second)
    }
}

fn default_first() -> char {
    'x'
}

fn default_second() -> char {
    'o'
}

impl Symbols {
    /// Creates a validated symbol mapping.
    ///
    /// Both symbols must be ASCII alphanumeric and must differ ignoring case.
    #[instrument]
    pub fn new(first: char, second: char) -> Result<Self, ConfigError> {
        for symbol in [first, second] {
            if !symbol.is_ascii_alphanumeric() {
                return Err(ConfigError::new(format!(
                    "Symbol {:?} must be an ASCII letter or digit",
                    symbol
                )));
            }
        }

        let first = first.to_ascii_lowercase();
        let second = second.to_ascii_lowercase();
        if first == second {
            return Err(ConfigError::new(format!(
                "Both marks use the symbol {:?}",
                first
            )));
        }

        Ok(Self { first, second })
    }

    /// Parses and validates symbols from TOML.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse symbols: {}", e)))
    }

    /// Loads symbols from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading symbols from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read symbols file: {}", e)))?;

        let symbols = Self::from_toml_str(&content)?;
        info!(first = %symbols.first, second = %symbols.second, "Symbols loaded");
        Ok(symbols)
    }

    /// Symbol for the given mark.
    pub fn symbol(&self, mark: Mark) -> char {
        match mark {
            Mark::X => self.first,
            Mark::O => self.second,
        }
    }

    /// Maps an input character to a square, ignoring case.
    pub fn classify(&self, c: char) -> Square {
        let folded = c.to_ascii_lowercase();
        if folded == self.first {
            Square::Occupied(Mark::X)
        } else if folded == self.second {
            Square::Occupied(Mark::O)
        } else {
            Square::Empty
        }
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self {
            first: default_first(),
            second: default_second(),
        }
    }
}
