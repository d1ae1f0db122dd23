//! Error types for the grid codec and properties parser.

use std::fmt;

/// Faults that make a single run-length token unreadable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenFault {
    /// A symbol appeared where a decimal run count was expected.
    MissingCount,
    /// The run count was zero.
    ZeroCount,
    /// The line ended after a run count, before its symbol.
    MissingSymbol,
    /// The symbol is reserved (the dead marker or a digit).
    ReservedSymbol(char),
}

impl fmt::Display for TokenFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenFault::MissingCount => write!(f, "expected a run count"),
            TokenFault::ZeroCount => write!(f, "run count must be positive"),
            TokenFault::MissingSymbol => write!(f, "run count has no symbol"),
            TokenFault::ReservedSymbol(symbol) => {
                write!(f, "symbol {symbol:?} is reserved")
            }
        }
    }
}

/// Malformed or inconsistent grid artifacts.
///
/// All variants abort loading; none are recovered silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// A map row has a different length from the first row.
    RaggedMap {
        /// 1-based line number of the offending row.
        line: usize,
    },
    /// A run-length token could not be read.
    BadToken {
        /// 1-based line number of the offending row.
        line: usize,
        /// What was wrong with the token.
        fault: TokenFault,
    },
    /// A row's run counts do not sum to the configured width.
    WidthMismatch {
        /// 1-based line number of the offending row.
        line: usize,
        /// Number of cells the row expanded to.
        found: u64,
        /// Configured grid width.
        expected: u16,
    },
    /// The number of rows does not match the configured height.
    HeightMismatch {
        /// Number of rows found.
        found: usize,
        /// Configured grid height.
        expected: u16,
    },
    /// The grid dimensions fall outside the supported ranges.
    BadDimensions {
        /// Inferred or requested width.
        width: usize,
        /// Inferred or requested height.
        height: usize,
    },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::RaggedMap { line } => {
                write!(f, "map row {line} differs in length from the first row")
            }
            FormatError::BadToken { line, fault } => {
                write!(f, "bad token on line {line}: {fault}")
            }
            FormatError::WidthMismatch {
                line,
                found,
                expected,
            } => {
                write!(f, "line {line} expands to {found} cells, expected {expected}")
            }
            FormatError::HeightMismatch { found, expected } => {
                write!(f, "found {found} rows, expected {expected}")
            }
            FormatError::BadDimensions { width, height } => {
                write!(f, "grid {width}x{height} is outside the supported size range")
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// Malformed values in a properties file.
///
/// Out-of-range values for recognized keys are clamped and are *not* errors;
/// only unparsable values and structurally broken lines are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A non-blank line has no `:` separator.
    MissingSeparator {
        /// 1-based line number of the offending line.
        line: usize,
    },
    /// A recognized key has a value of the wrong type.
    UnparsableValue {
        /// The recognized key.
        key: String,
        /// The raw value that failed to parse.
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingSeparator { line } => {
                write!(f, "line {line} has no `key:value` separator")
            }
            ConfigError::UnparsableValue { key, value } => {
                write!(f, "value {value:?} is not valid for property {key:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
