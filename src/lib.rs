//! Board-synchronization client for a remote authoritative chess service.
//!
//! The crate holds no chess rules: move legality, endgame detection, and
//! move suggestions all belong to the remote service. What lives here is
//! the synchronization protocol around it - the local board representation,
//! the compact-encoding codec, the move submission state machine, and the
//! reset/resume lifecycle that reconciles local state with the server's.

pub mod board;
pub mod core;
pub mod networking;
pub mod notation;
pub mod session;

pub use board::{BoardGrid, BoardStore, Piece, PieceColor, PieceKind, Square};
pub use core::{ClientConfig, EventBus, GameEvent, SyncError, SyncResult};
pub use networking::{GameService, HttpGameService};
pub use session::GameSession;
