//! Compact board-encoding codec
//!
//! Decodes the piece-placement field of Forsyth-Edwards Notation into the
//! local grid and encodes it back. Only the first space-separated field of
//! a full FEN string is consumed; turn, castling rights and the rest stay
//! with the authoritative service.

use crate::board::{BoardGrid, Piece, Square};
use crate::core::{SyncError, SyncResult};

/// Piece placement of the standard initial position
pub const START_POSITION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Decode a board encoding into a grid.
///
/// The encoding is eight '/'-separated ranks, top rank first. A digit
/// expands to that many empty cells; a letter places a piece, case
/// selecting the color. Every rank must sum to exactly 8 cells.
pub fn decode_board(encoding: &str) -> SyncResult<BoardGrid> {
    let board_field = encoding.split_whitespace().next().unwrap_or("");
    let ranks: Vec<&str> = board_field.split('/').collect();
    if ranks.len() != 8 {
        return Err(SyncError::MalformedEncoding {
            message: format!("expected 8 ranks, found {}", ranks.len()),
        });
    }

    let mut grid = BoardGrid::new();
    for (row, rank) in ranks.iter().enumerate() {
        let mut col: usize = 0;
        for ch in rank.chars() {
            if let Some(run) = ch.to_digit(10) {
                col += run as usize;
            } else {
                let piece = Piece::from_fen_letter(ch).ok_or_else(|| {
                    SyncError::MalformedEncoding {
                        message: format!("unrecognized piece letter '{ch}' in rank {}", row + 1),
                    }
                })?;
                if col >= 8 {
                    return Err(SyncError::MalformedEncoding {
                        message: format!("rank {} overflows 8 cells", row + 1),
                    });
                }
                grid.set(Square::new(row as u8, col as u8)?, Some(piece));
                col += 1;
            }
        }
        if col != 8 {
            return Err(SyncError::MalformedEncoding {
                message: format!("rank {} sums to {col} cells, expected 8", row + 1),
            });
        }
    }
    Ok(grid)
}

/// Encode a grid back into the compact rank/file form
pub fn encode_board(grid: &BoardGrid) -> String {
    let mut ranks = Vec::with_capacity(8);
    for row in grid.rows() {
        let mut rank = String::new();
        let mut empty_run = 0u32;
        for cell in row {
            match cell {
                Some(piece) => {
                    if empty_run > 0 {
                        rank.push_str(&empty_run.to_string());
                        empty_run = 0;
                    }
                    rank.push(piece.fen_letter());
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            rank.push_str(&empty_run.to_string());
        }
        ranks.push(rank);
    }
    ranks.join("/")
}
