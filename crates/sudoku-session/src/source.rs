//! The puzzle-source boundary and session loading.

use crate::error::{LoadError, SourceError};
use crate::session::Session;
use serde::{Deserialize, Serialize};

/// One stored puzzle: clues and full solution, each an 81-character
/// row-major digit string. This is the wire shape the HTTP endpoint serves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleRecord {
    pub question: String,
    pub solution: String,
}

/// Anything that can hand out one puzzle on request.
///
/// `Ok(None)` means the source is healthy but has nothing to serve, which
/// callers treat differently from a transport or storage failure only for
/// logging; both end a load attempt. Successive calls carry no ordering
/// guarantee and may return different puzzles.
pub trait PuzzleSource {
    fn fetch_one(&self) -> Result<Option<PuzzleRecord>, SourceError>;
}

/// Fetch one puzzle from `source` and open a fresh session on it.
///
/// All-or-nothing: a source failure, an empty source, or a record that does
/// not decode leaves nothing behind. No retry happens here; retry policy
/// belongs to the caller. Nothing is cached, so calling again may yield a
/// different puzzle.
pub fn load<S: PuzzleSource + ?Sized>(source: &S) -> Result<Session, LoadError> {
    let record = source
        .fetch_one()
        .map_err(|e| LoadError::SourceUnavailable(Some(e)))?
        .ok_or(LoadError::SourceUnavailable(None))?;
    Ok(Session::from_record(&record)?)
}
