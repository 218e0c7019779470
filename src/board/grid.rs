//! The 8x8 board grid

use crate::board::{Piece, Square};

/// Fully populated 8x8 matrix of cells. Row 0 is the encoding's top rank
/// (rank 8); a cell is either empty or holds one piece.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct BoardGrid {
    cells: [[Option<Piece>; 8]; 8],
}

impl BoardGrid {
    /// Empty board
    pub fn new() -> Self {
        Self::default()
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.row as usize][square.col as usize]
    }

    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square.row as usize][square.col as usize] = piece;
    }

    /// Iterate rows top rank first, mirroring the encoding order
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Piece>; 8]> {
        self.cells.iter()
    }

    /// Total number of cells, always 64
    pub fn cell_count(&self) -> usize {
        self.cells.iter().map(|row| row.len()).sum()
    }
}
