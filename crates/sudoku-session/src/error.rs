//! Error types for puzzle decoding and session loading.

use thiserror::Error;

/// Why an 81-character puzzle string failed to decode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The string was not exactly 81 characters.
    #[error("expected 81 characters, got {0}")]
    BadLength(usize),
    /// A character was not an ASCII digit.
    #[error("non-digit character {found:?} at index {index}")]
    BadDigit { index: usize, found: char },
    /// The solution string left a cell blank. A solution must give the
    /// correct digit for every position.
    #[error("solution has a blank cell at index {0}")]
    BlankSolutionCell(usize),
}

/// Failure reported by a puzzle source.
///
/// Carries a display message only; storage and transport internals stay
/// behind the source boundary.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct SourceError {
    message: String,
}

impl SourceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Why a session failed to load. Loads are all-or-nothing: no partial
/// session ever escapes a failed attempt.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source failed, or had no record to return (`None` source).
    #[error("puzzle source unavailable")]
    SourceUnavailable(#[source] Option<SourceError>),
    /// The fetched record was not a pair of valid 81-digit grids.
    #[error("invalid puzzle record")]
    Decode(#[from] DecodeError),
}
