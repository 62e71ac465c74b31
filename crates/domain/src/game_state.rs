//! Authoritative game snapshot as received from the server
//!
//! A `GameState` is always received wholesale. The client never edits one in
//! place; a newer snapshot replaces the older one.

use crate::{Board, Color};

/// Check / end-of-game flags reported by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameStatus {
    pub check: bool,
    pub checkmate: bool,
    pub stalemate: bool,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        self.checkmate || self.stalemate
    }
}

/// Remaining castling options for one side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideCastlingRights {
    pub king_side: bool,
    pub queen_side: bool,
}

impl Default for SideCastlingRights {
    fn default() -> Self {
        Self {
            king_side: true,
            queen_side: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CastlingRights {
    pub white: SideCastlingRights,
    pub black: SideCastlingRights,
}

/// Server-authoritative snapshot of the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub current_player: Color,
    pub status: GameStatus,
    pub castling_rights: CastlingRights,
}

impl GameState {
    pub fn new(board: Board, current_player: Color) -> Self {
        Self {
            board,
            current_player,
            status: GameStatus::default(),
            castling_rights: CastlingRights::default(),
        }
    }

    pub fn with_status(mut self, status: GameStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_castling_rights(mut self, castling_rights: CastlingRights) -> Self {
        self.castling_rights = castling_rights;
        self
    }
}
