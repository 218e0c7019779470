//! Core infrastructure: configuration, errors, and the session event channel

pub mod config;
pub mod error;
pub mod events;

pub use config::ClientConfig;
pub use error::{SyncError, SyncResult};
pub use events::{EventBus, GameEvent};
