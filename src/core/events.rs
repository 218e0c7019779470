//! Session event channel
//!
//! The core never talks to a UI toolkit directly. Every state change and
//! every surfaced error is published on a channel that the presentation
//! layer subscribes to. Cloned receivers compete: each event is observed
//! by exactly one subscriber, so a session normally has a single consumer.

use crossbeam_channel::{unbounded, Receiver, Sender};

/// Events published by a game session
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// The grid was replaced wholesale from a fresh server encoding
    BoardReplaced,
    /// A move was confirmed by the server and applied locally
    MoveApplied { from: String, to: String },
    /// The server rejected the move; local state is unchanged
    MoveRejected { reason: String },
    /// Game status text changed (check, checkmate, ongoing, ...)
    StatusUpdated { text: String },
    /// Move history was replaced with the server's authoritative list
    HistoryReplaced { length: usize },
    /// Engine evaluation text changed
    EvaluationUpdated { text: String },
    /// Suggested-move text changed
    SuggestionUpdated { text: String },
    /// The remote game was reinitialized and local state re-synchronized
    SessionReset,
    /// A previously saved game was resumed from server state
    SessionResumed,
    /// An auxiliary request after a successful move failed. The applied
    /// move is not rolled back.
    FollowUpFailed { endpoint: String, reason: String },
    /// A lifecycle or move request failed outright
    RequestFailed { reason: String },
}

/// Unbounded channel carrying [`GameEvent`]s
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: Sender<GameEvent>,
    rx: Receiver<GameEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self { tx, rx }
    }

    /// Obtain a receiver for session events
    pub fn subscribe(&self) -> Receiver<GameEvent> {
        self.rx.clone()
    }

    /// Publish an event. Send cannot fail while the bus holds its own
    /// receiver, so the result is intentionally discarded.
    pub fn publish(&self, event: GameEvent) {
        let _ = self.tx.send(event);
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
