//! Board state store
//!
//! Single owner of the client-side game state: the grid, the move history,
//! and the opaque display strings sourced from the server. Mutated only on
//! the session's event-handling path, never from a background task.
//!
//! Reconciliation is all-or-nothing: a bad encoding leaves the previous
//! grid untouched and the error propagates to the caller.

use crate::board::{BoardGrid, Piece, PieceColor, Square};
use crate::core::SyncResult;
use crate::notation;

/// Status text shown before any server verdict has arrived
pub const INITIAL_STATUS: &str = "Game is ongoing.";

/// Client-side store for the current game
#[derive(Clone, Debug)]
pub struct BoardStore {
    grid: BoardGrid,
    move_history: Vec<String>,
    status_text: String,
    evaluation: String,
    suggestion: String,
}

impl BoardStore {
    /// Store holding the standard start position
    pub fn new() -> Self {
        Self {
            // The canonical start encoding always decodes
            grid: notation::decode_board(notation::START_POSITION)
                .unwrap_or_else(|_| BoardGrid::new()),
            move_history: Vec::new(),
            status_text: INITIAL_STATUS.to_string(),
            evaluation: String::new(),
            suggestion: String::new(),
        }
    }

    pub fn grid(&self) -> &BoardGrid {
        &self.grid
    }

    pub fn move_history(&self) -> &[String] {
        &self.move_history
    }

    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    pub fn evaluation(&self) -> &str {
        &self.evaluation
    }

    pub fn suggestion(&self) -> &str {
        &self.suggestion
    }

    /// Mover attribution for a history entry: even indices are white
    pub fn mover_at(&self, index: usize) -> PieceColor {
        if index % 2 == 0 {
            PieceColor::White
        } else {
            PieceColor::Black
        }
    }

    /// Decode an authoritative encoding and atomically swap the grid.
    /// Decode failure leaves the prior grid in place.
    pub fn replace_from_encoding(&mut self, encoding: &str) -> SyncResult<()> {
        let grid = notation::decode_board(encoding)?;
        self.grid = grid;
        Ok(())
    }

    /// Apply a server-confirmed move locally: clear the origin, place the
    /// piece on the destination. Only valid after a success verdict that
    /// carried no fresh encoding; there is no local legality checker.
    pub fn apply_local_move(&mut self, from: Square, to: Square, piece: Piece) {
        self.grid.set(from, None);
        self.grid.set(to, Some(piece));
    }

    /// Replace the move history wholesale; no element-wise merging
    pub fn set_history(&mut self, history: Vec<String>) {
        self.move_history = history;
    }

    pub fn set_status(&mut self, text: String) {
        self.status_text = text;
    }

    pub fn set_evaluation(&mut self, text: String) {
        self.evaluation = text;
    }

    pub fn set_suggestion(&mut self, text: String) {
        self.suggestion = text;
    }

    /// Return to the initial display state after a reset
    pub fn clear_annotations(&mut self) {
        self.move_history.clear();
        self.status_text = INITIAL_STATUS.to_string();
        self.evaluation.clear();
        self.suggestion.clear();
    }
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new()
    }
}
