//! Per-gesture move submission state machine
//!
//! Idle -> Dragging -> AwaitingServer -> Idle. Exactly one gesture may be
//! past Idle at a time; a second begin while a move is awaiting the server
//! is refused so the grid is never mutated out of order relative to an
//! in-flight response.

use crate::board::{Piece, Square};

/// A completed drag gesture, ready to submit
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingMove {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum FlowState {
    #[default]
    Idle,
    Dragging {
        from: Square,
        piece: Piece,
    },
    AwaitingServer {
        from: Square,
        to: Square,
        piece: Piece,
    },
}

/// Gesture state for the move submission flow
#[derive(Clone, Copy, Debug, Default)]
pub struct MoveFlow {
    state: FlowState,
}

impl MoveFlow {
    /// Start a drag gesture. Refused unless the flow is idle.
    pub fn begin(&mut self, from: Square, piece: Piece) -> bool {
        if self.state != FlowState::Idle {
            return false;
        }
        self.state = FlowState::Dragging { from, piece };
        true
    }

    /// Complete the gesture at a destination square, moving to
    /// AwaitingServer. Returns the move to submit, or `None` when no drag
    /// is active or the drop landed back on the source square.
    pub fn drop_to(&mut self, to: Square) -> Option<PendingMove> {
        match self.state {
            FlowState::Dragging { from, piece } if from != to => {
                self.state = FlowState::AwaitingServer { from, to, piece };
                Some(PendingMove { from, to, piece })
            }
            FlowState::Dragging { .. } => {
                self.state = FlowState::Idle;
                None
            }
            _ => None,
        }
    }

    /// Abandon a drag without submitting
    pub fn cancel(&mut self) {
        if matches!(self.state, FlowState::Dragging { .. }) {
            self.state = FlowState::Idle;
        }
    }

    /// Terminal transition after the server verdict was handled
    pub fn resolve(&mut self) {
        self.state = FlowState::Idle;
    }

    pub fn is_idle(&self) -> bool {
        self.state == FlowState::Idle
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, FlowState::Dragging { .. })
    }

    pub fn is_awaiting(&self) -> bool {
        matches!(self.state, FlowState::AwaitingServer { .. })
    }
}
