//! REST response bodies

use serde::{Deserialize, Serialize};

/// One destination in a `GET /valid_moves` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDoc {
    pub row: i64,
    pub col: i64,
    /// `"king_side"` or `"queen_side"` for castling moves
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub castling: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub en_passant: bool,
}

impl MoveDoc {
    pub fn new(row: i64, col: i64) -> Self {
        Self {
            row,
            col,
            castling: None,
            en_passant: false,
        }
    }
}

/// Body of a `GET /valid_moves` response
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidMovesResponse {
    pub moves: Vec<MoveDoc>,
}

/// Body of `POST /move` and `POST /new_game` responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub success: bool,
    /// Rejection reason, when the server gives one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ActionResponse {
    pub fn accepted() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}
