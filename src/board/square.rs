//! Board squares and algebraic notation
//!
//! A square has two addressing forms that must always agree: zero-indexed
//! (row, col) counted from the encoding's top rank, and the algebraic name
//! used on the wire (file letter 'a'..'h' plus rank digit '1'..'8').
//! file = 'a' + col, rank = 8 - row. Row 0 is therefore rank 8.

use crate::core::{SyncError, SyncResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A board coordinate, zero-indexed from the top-left of the decoded grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Build a square, rejecting coordinates outside the 8x8 board
    pub fn new(row: u8, col: u8) -> SyncResult<Self> {
        if row > 7 || col > 7 {
            return Err(SyncError::OutOfRange {
                message: format!("({row}, {col}) is outside the 8x8 board"),
            });
        }
        Ok(Self { row, col })
    }

    /// Algebraic name of this square, e.g. (0, 4) -> "e8"
    pub fn to_algebraic(self) -> String {
        let file = (b'a' + self.col) as char;
        let rank = 8 - self.row;
        format!("{file}{rank}")
    }

    /// Parse an algebraic square name, e.g. "e2" -> (6, 4)
    pub fn from_algebraic(name: &str) -> SyncResult<Self> {
        let mut chars = name.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(SyncError::OutOfRange {
                message: format!("'{name}' is not a two-character square name"),
            });
        };
        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return Err(SyncError::OutOfRange {
                message: format!("'{name}' is not a valid algebraic square"),
            });
        }
        let col = file as u8 - b'a';
        let row = 8 - (rank as u8 - b'0');
        Ok(Self { row, col })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
