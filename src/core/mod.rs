//! Core module - pure game rules with no I/O
//!
//! Everything here is deterministic and renderer-agnostic: the grid, the
//! falling piece, row clearing, scoring and the tick state machine.

pub mod block;
pub mod board;
pub mod game;
pub mod piece;
pub mod rng;

// Re-export commonly used types
pub use block::Block;
pub use board::Board;
pub use game::Game;
pub use piece::Piece;
pub use rng::{PiecePicker, SimpleRng};
