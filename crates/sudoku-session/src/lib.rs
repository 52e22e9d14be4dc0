//! Play-session engine for served Sudoku puzzles.
//!
//! A puzzle arrives from a [`PuzzleSource`] as two 81-character digit
//! strings: the question (clues, `0` for blank) and the full solution. The
//! loader decodes them into [`Grid`]s and opens a [`Session`], which tracks
//! the player's entries against the solution, counts mistakes toward
//! [`MISTAKE_LIMIT`], and exposes a derived per-cell classification for
//! rendering. [`SessionMachine`] wraps the `Loading -> Ready | Failed`
//! lifecycle and discards load results that arrive after a restart.
//!
//! The engine never generates or solves puzzles and never second-guesses a
//! fetched record beyond the two-string decode.

pub mod error;
pub mod grid;
pub mod machine;
pub mod session;
pub mod source;

pub use error::{DecodeError, LoadError, SourceError};
pub use grid::{Grid, Position, SIZE};
pub use machine::{LoadTicket, Phase, SessionMachine};
pub use session::{CellKind, CellView, EditOutcome, Session, MISTAKE_LIMIT};
pub use source::{load, PuzzleRecord, PuzzleSource};
