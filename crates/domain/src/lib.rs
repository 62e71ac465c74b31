//! boardsync Domain
//!
//! Pure value types describing a chess game as the server reports it.
//! Nothing in this crate performs I/O or knows the wire format.

pub mod board;
pub mod error;
pub mod game_state;
pub mod moves;
pub mod piece;

pub use board::{Board, Cell, Square, BOARD_SIZE};
pub use error::DomainError;
pub use game_state::{CastlingRights, GameState, GameStatus, SideCastlingRights};
pub use moves::{CastlingSide, LegalMove, SpecialMove};
pub use piece::{Color, Piece, PieceKind};
