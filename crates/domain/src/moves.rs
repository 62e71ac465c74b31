//! Legal move destinations returned by the server

use crate::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastlingSide {
    KingSide,
    QueenSide,
}

/// Annotation the server attaches to non-ordinary moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialMove {
    Castling(CastlingSide),
    EnPassant,
}

/// A destination square for the currently selected piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LegalMove {
    pub to: Square,
    pub special: Option<SpecialMove>,
}

impl LegalMove {
    pub fn plain(to: Square) -> Self {
        Self { to, special: None }
    }

    pub fn is_castling(&self) -> bool {
        matches!(self.special, Some(SpecialMove::Castling(_)))
    }
}
