//! 9x9 digit grids and their 81-character wire encoding.

use crate::error::DecodeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of rows and columns in a grid.
pub const SIZE: usize = 9;

/// A cell coordinate on the board, 0-based from the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < SIZE && col < SIZE);
        Self { row, col }
    }

    /// All 81 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| Position::new(row, col)))
    }
}

/// An owned 9x9 matrix of digits. `0` means blank.
///
/// Cloning produces an independent deep copy, so a grid handed out as a
/// starting point can never be mutated through the original.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid([[u8; SIZE]; SIZE]);

impl Grid {
    /// An all-blank grid.
    pub fn empty() -> Self {
        Self([[0; SIZE]; SIZE])
    }

    /// Build a grid from row arrays. Digits must be in `0..=9`.
    pub fn from_rows(rows: [[u8; SIZE]; SIZE]) -> Self {
        debug_assert!(rows.iter().flatten().all(|&d| d <= 9));
        Self(rows)
    }

    /// Parse an 81-character row-major digit string (`'0'` = blank).
    pub fn decode(s: &str) -> Result<Self, DecodeError> {
        if s.chars().count() != SIZE * SIZE {
            return Err(DecodeError::BadLength(s.chars().count()));
        }
        let mut grid = Self::empty();
        for (index, ch) in s.chars().enumerate() {
            if !ch.is_ascii_digit() {
                return Err(DecodeError::BadDigit { index, found: ch });
            }
            let digit = ch as u8 - b'0';
            grid.0[index / SIZE][index % SIZE] = digit;
        }
        Ok(grid)
    }

    /// Serialize back to the 81-character wire form. `decode` then `encode`
    /// returns the input unchanged.
    pub fn encode(&self) -> String {
        let mut out = String::with_capacity(SIZE * SIZE);
        for pos in Position::all() {
            out.push(char::from(b'0' + self.get(pos)));
        }
        out
    }

    pub fn get(&self, pos: Position) -> u8 {
        self.0[pos.row][pos.col]
    }

    pub fn set(&mut self, pos: Position, digit: u8) {
        debug_assert!(digit <= 9);
        self.0[pos.row][pos.col] = digit;
    }

    pub fn is_blank(&self, pos: Position) -> bool {
        self.get(pos) == 0
    }

    /// Index of the first blank cell in row-major order, if any.
    pub fn first_blank(&self) -> Option<usize> {
        Position::all().position(|pos| self.is_blank(pos))
    }

    pub fn rows(&self) -> &[[u8; SIZE]; SIZE] {
        &self.0
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.0.iter().enumerate() {
            for (c, &digit) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                if digit == 0 {
                    write!(f, ".")?;
                } else {
                    write!(f, "{}", digit)?;
                }
            }
            if r + 1 < SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
