//! Wire types for the remote game service
//!
//! Squares travel as algebraic names ("e4"), never (row, col) pairs.
//! Promotion is a single lowercase piece-kind letter. Response shapes are
//! tolerant: optional fields cover the service's two envelope dialects
//! (top-level `fen` vs. a nested `state` object).

use serde::{Deserialize, Serialize};

/// Move submission payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoveRequest {
    pub from_square: String,
    pub to_square: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion: Option<String>,
}

/// Success verdict for a submitted move. `fen` and `move_history` are
/// optional; a bare verdict means the caller applies the move locally.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct MoveAccepted {
    pub fen: Option<String>,
    pub move_history: Option<Vec<String>>,
}

/// Raw move response before the verdict is split into Ok/Err
#[derive(Debug, Clone, Deserialize)]
pub struct MoveResponseBody {
    pub valid: Option<bool>,
    pub error: Option<String>,
    pub fen: Option<String>,
    pub move_history: Option<Vec<String>>,
    pub state: Option<StateBody>,
}

/// Authoritative game state
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct StateResponse {
    pub fen: Option<String>,
    pub turn: Option<String>,
    #[serde(default)]
    pub move_history: Vec<String>,
}

/// Nested `state` object some endpoints wrap their payload in
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StateBody {
    pub fen: Option<String>,
    #[serde(default)]
    pub move_history: Vec<String>,
}

/// Reset / undo response; `fen` may be top-level, nested, or absent
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ResetResponse {
    pub fen: Option<String>,
    pub state: Option<StateBody>,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl ResetResponse {
    /// The returned encoding, wherever the service put it
    pub fn fen(&self) -> Option<&str> {
        self.fen
            .as_deref()
            .or_else(|| self.state.as_ref().and_then(|s| s.fen.as_deref()))
    }

    pub fn history(&self) -> Option<&[String]> {
        self.state.as_ref().map(|s| s.move_history.as_slice())
    }
}

/// Endgame detector output; only `message` feeds the status display
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct EndgameResponse {
    pub status: Option<String>,
    pub winner: Option<String>,
    pub message: String,
}

/// Move-history listing
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct HistoryResponse {
    #[serde(default)]
    pub history: Vec<String>,
}

/// Position evaluation; the display string is authoritative, the numeric
/// score is advisory
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct EvaluationResponse {
    pub score: Option<i64>,
    pub evaluation: String,
}

/// Suggested-move text
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct BestMoveResponse {
    pub best_move: Option<String>,
    pub message: String,
}
