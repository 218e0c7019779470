//! Remote service boundary: wire types and the HTTP client

pub mod client;
pub mod dto;

pub use client::{GameService, HttpGameService};
pub use dto::{
    BestMoveResponse, EndgameResponse, EvaluationResponse, HistoryResponse, MoveAccepted,
    MoveRequest, ResetResponse, StateResponse,
};
