//! Local board representation: squares, pieces, the grid, and the store

pub mod grid;
pub mod piece;
pub mod square;
pub mod store;

pub use grid::BoardGrid;
pub use piece::{is_promotion_move, Piece, PieceColor, PieceKind, DEFAULT_PROMOTION};
pub use square::Square;
pub use store::{BoardStore, INITIAL_STATUS};
