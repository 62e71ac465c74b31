//! Game-state document
//!
//! The same document is embedded in `game_state` push notifications and
//! returned by `GET /game_state`.

use serde::{Deserialize, Serialize};

/// Side color as the server spells it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorDoc {
    White,
    Black,
}

/// A piece on the wire.
///
/// `kind` is kept as a raw string so a piece type the client does not know
/// still parses; the translator decides how to show it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceDoc {
    pub color: ColorDoc,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_moved: Option<bool>,
}

impl PieceDoc {
    pub fn new(color: ColorDoc, kind: impl Into<String>) -> Self {
        Self {
            color,
            kind: kind.into(),
            has_moved: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideCastlingDoc {
    pub king_side: bool,
    pub queen_side: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastlingRightsDoc {
    pub white: SideCastlingDoc,
    pub black: SideCastlingDoc,
}

/// Full board plus whose turn it is
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStateDoc {
    /// Eight rows of eight cells; `null` marks an empty cell
    pub board: Vec<Vec<Option<PieceDoc>>>,
    #[serde(rename = "currentPlayer")]
    pub current_player: ColorDoc,
    #[serde(
        rename = "castlingRights",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub castling_rights: Option<CastlingRightsDoc>,
    #[serde(default)]
    pub check: bool,
    #[serde(default)]
    pub checkmate: bool,
    #[serde(default)]
    pub stalemate: bool,
}

impl GameStateDoc {
    /// An 8x8 board with no pieces
    pub fn empty(current_player: ColorDoc) -> Self {
        Self {
            board: vec![vec![None; 8]; 8],
            current_player,
            castling_rights: None,
            check: false,
            checkmate: false,
            stalemate: false,
        }
    }
}
