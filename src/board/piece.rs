//! Piece identity and FEN letter mapping
//!
//! Identity is the (color, kind) pair; the Unicode glyph is a rendering
//! detail derived from it. FEN letters use case for color: uppercase is
//! white, lowercase is black.

use crate::board::Square;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceColor {
    White,
    Black,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Lowercase FEN letter for this kind, also used on the wire for
    /// promotion choices
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: PieceColor,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(color: PieceColor, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Map a FEN piece letter to a piece; `None` for unrecognized letters
    pub fn from_fen_letter(letter: char) -> Option<Self> {
        let color = if letter.is_ascii_uppercase() {
            PieceColor::White
        } else {
            PieceColor::Black
        };
        let kind = match letter.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some(Self { color, kind })
    }

    /// FEN letter for this piece, case encoding the color
    pub fn fen_letter(self) -> char {
        match self.color {
            PieceColor::White => self.kind.letter().to_ascii_uppercase(),
            PieceColor::Black => self.kind.letter(),
        }
    }

    /// Unicode chess glyph for display
    pub fn glyph(self) -> char {
        match (self.color, self.kind) {
            (PieceColor::White, PieceKind::King) => '\u{2654}',
            (PieceColor::White, PieceKind::Queen) => '\u{2655}',
            (PieceColor::White, PieceKind::Rook) => '\u{2656}',
            (PieceColor::White, PieceKind::Bishop) => '\u{2657}',
            (PieceColor::White, PieceKind::Knight) => '\u{2658}',
            (PieceColor::White, PieceKind::Pawn) => '\u{2659}',
            (PieceColor::Black, PieceKind::King) => '\u{265A}',
            (PieceColor::Black, PieceKind::Queen) => '\u{265B}',
            (PieceColor::Black, PieceKind::Rook) => '\u{265C}',
            (PieceColor::Black, PieceKind::Bishop) => '\u{265D}',
            (PieceColor::Black, PieceKind::Knight) => '\u{265E}',
            (PieceColor::Black, PieceKind::Pawn) => '\u{265F}',
        }
    }
}

/// True iff the moved piece is a pawn landing on the far rank for its
/// color (rank 8 for white, rank 1 for black). A local heuristic only;
/// the authoritative rules engine makes the final determination.
pub fn is_promotion_move(piece: Piece, to: Square) -> bool {
    if piece.kind != PieceKind::Pawn {
        return false;
    }
    match piece.color {
        PieceColor::White => to.row == 0,
        PieceColor::Black => to.row == 7,
    }
}

/// Promotion choice used when the heuristic fires and no choice was made
pub const DEFAULT_PROMOTION: PieceKind = PieceKind::Queen;
