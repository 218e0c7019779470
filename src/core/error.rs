//! Error types for the board-sync client
//!
//! Provides custom error types covering board decoding, coordinate
//! conversion, network transport, and server-side move rejection.

use thiserror::Error;

/// Errors that can occur while synchronizing with the remote service
#[derive(Error, Debug)]
pub enum SyncError {
    /// Board encoding received from the server could not be decoded.
    /// Fatal for that update only; prior board state is retained.
    #[error("Malformed board encoding: {message}")]
    MalformedEncoding { message: String },

    /// Coordinate conversion outside the 8x8 board or a malformed
    /// algebraic square name. Should not occur with valid UI input.
    #[error("Square out of range: {message}")]
    OutOfRange { message: String },

    /// Network failure or non-success HTTP status. Recovered by leaving
    /// state unchanged and notifying the subscriber.
    #[error("Request failed: {message}")]
    RequestFailed { message: String },

    /// Server rejected the move as illegal. State unchanged, distinct
    /// message surfaced to the user.
    #[error("Illegal move: {message}")]
    IllegalMove { message: String },

    /// Another flow (move, reset, resume, undo) is still in flight.
    /// The session serializes flows; the caller must wait and retry.
    #[error("Session busy: {message}")]
    Busy { message: String },
}

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        SyncError::RequestFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias for sync operations
pub type SyncResult<T> = Result<T, SyncError>;
