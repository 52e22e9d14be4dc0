//! The live play session: one puzzle, one player, one mistake counter.

use crate::error::DecodeError;
use crate::grid::{Grid, Position};
use crate::source::PuzzleRecord;
use serde::{Deserialize, Serialize};

/// Wrong entries allowed before the session starts the puzzle over.
pub const MISTAKE_LIMIT: usize = 5;

/// Display classification of a cell, recomputed from current state on every
/// read and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    /// Fixed digit supplied by the puzzle; not editable.
    Clue,
    /// Editable cell the player has left blank.
    Empty,
    /// Player's entry matches the solution.
    Correct,
    /// Player's entry differs from the solution.
    Incorrect,
}

/// Per-cell render view: classification plus the selection-derived flags,
/// which are independent of each other and of the classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub kind: CellKind,
    /// This cell is the selected one.
    pub selected: bool,
    /// Shares a row or column with the selected cell (the selected cell is
    /// not its own peer).
    pub peer: bool,
}

/// What a [`Session::edit`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditOutcome {
    /// Classification of the entry as written: for ignored edits the cell's
    /// unchanged classification, and for the entry that hits the limit
    /// `Incorrect`, even though the restart has already blanked the cell by
    /// the time the caller sees this.
    pub kind: CellKind,
    /// This edit was the one that hit [`MISTAKE_LIMIT`]. The session has
    /// already started the puzzle over when this is set.
    pub limit_reached: bool,
}

impl EditOutcome {
    fn ignored(kind: CellKind) -> Self {
        Self {
            kind,
            limit_reached: false,
        }
    }
}

/// The full mutable play state for one puzzle instance.
///
/// Holds three grids: the immutable question (clues), the immutable
/// solution, and the player's grid, which starts as a deep copy of the
/// question. Clue positions in the player's grid always mirror the
/// question; every mutation path refuses to touch them.
#[derive(Debug, Clone)]
pub struct Session {
    question: Grid,
    solution: Grid,
    user: Grid,
    selected: Option<Position>,
    mistakes: usize,
}

impl Session {
    /// Open a session on an already-decoded puzzle. Mistakes start at zero
    /// and nothing is selected.
    pub fn new(question: Grid, solution: Grid) -> Self {
        let user = question.clone();
        Self {
            question,
            solution,
            user,
            selected: None,
            mistakes: 0,
        }
    }

    /// Decode a fetched record into a fresh session. Fails if either string
    /// is not 81 digits, or if the solution leaves any cell blank.
    pub fn from_record(record: &PuzzleRecord) -> Result<Self, DecodeError> {
        let question = Grid::decode(&record.question)?;
        let solution = Grid::decode(&record.solution)?;
        if let Some(index) = solution.first_blank() {
            return Err(DecodeError::BlankSolutionCell(index));
        }
        Ok(Self::new(question, solution))
    }

    pub fn question(&self) -> &Grid {
        &self.question
    }

    pub fn solution(&self) -> &Grid {
        &self.solution
    }

    pub fn user(&self) -> &Grid {
        &self.user
    }

    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    pub fn mistakes(&self) -> usize {
        self.mistakes
    }

    pub fn is_clue(&self, pos: Position) -> bool {
        !self.question.is_blank(pos)
    }

    /// Apply a raw text entry to a cell.
    ///
    /// Clue cells ignore the edit. An empty string clears the cell without
    /// penalty. Anything that does not parse to a digit in `1..=9` is
    /// ignored; free-text input must never corrupt state or score. A wrong
    /// digit counts one mistake each time it is entered, repeats included.
    /// The entry that reaches [`MISTAKE_LIMIT`] restarts the puzzle in
    /// place: player grid back to the clues, mistakes back to zero.
    pub fn edit(&mut self, pos: Position, raw: &str) -> EditOutcome {
        if self.is_clue(pos) {
            return EditOutcome::ignored(CellKind::Clue);
        }
        if raw.is_empty() {
            self.user.set(pos, 0);
            return EditOutcome {
                kind: CellKind::Empty,
                limit_reached: false,
            };
        }
        let value = match raw.parse::<u8>() {
            Ok(v @ 1..=9) => v,
            _ => return EditOutcome::ignored(self.classify(pos)),
        };

        self.user.set(pos, value);
        if value == self.solution.get(pos) {
            return EditOutcome {
                kind: CellKind::Correct,
                limit_reached: false,
            };
        }

        self.mistakes += 1;
        if self.mistakes >= MISTAKE_LIMIT {
            self.restart_in_place();
            return EditOutcome {
                kind: CellKind::Incorrect,
                limit_reached: true,
            };
        }
        EditOutcome {
            kind: CellKind::Incorrect,
            limit_reached: false,
        }
    }

    /// Blank every editable cell holding a wrong entry. Correct entries and
    /// empty cells stay; the mistake count stays too, this clears the marks
    /// on the board, not the score.
    pub fn reset_wrong_answers(&mut self) {
        for pos in Position::all() {
            if self.question.is_blank(pos) {
                let entered = self.user.get(pos);
                if entered != 0 && entered != self.solution.get(pos) {
                    self.user.set(pos, 0);
                }
            }
        }
    }

    /// Remember the last cell the player touched. Works on clue cells too;
    /// selection only drives highlighting, never correctness.
    pub fn select_cell(&mut self, pos: Position) {
        self.selected = Some(pos);
    }

    pub fn classify(&self, pos: Position) -> CellKind {
        if self.is_clue(pos) {
            return CellKind::Clue;
        }
        match self.user.get(pos) {
            0 => CellKind::Empty,
            v if v == self.solution.get(pos) => CellKind::Correct,
            _ => CellKind::Incorrect,
        }
    }

    pub fn is_selected(&self, pos: Position) -> bool {
        self.selected == Some(pos)
    }

    pub fn is_peer(&self, pos: Position) -> bool {
        match self.selected {
            Some(sel) => sel != pos && (sel.row == pos.row || sel.col == pos.col),
            None => false,
        }
    }

    pub fn view(&self, pos: Position) -> CellView {
        CellView {
            kind: self.classify(pos),
            selected: self.is_selected(pos),
            peer: self.is_peer(pos),
        }
    }

    // Same puzzle, clean slate. Reuses the question already in memory;
    // fetching a fresh puzzle instead is the caller's call via a machine
    // restart.
    fn restart_in_place(&mut self) {
        self.user = self.question.clone();
        self.selected = None;
        self.mistakes = 0;
    }
}
