//! Move submission and session lifecycle flows

pub mod flow;
pub mod session;

pub use flow::{MoveFlow, PendingMove};
pub use session::GameSession;
