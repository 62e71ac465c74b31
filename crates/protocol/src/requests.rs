//! REST request bodies and query strings

use serde::{Deserialize, Serialize};

use crate::endpoints;

/// Query string for `GET /valid_moves`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidMovesQuery {
    pub row: u8,
    pub col: u8,
}

impl ValidMovesQuery {
    /// Endpoint path including the query string
    pub fn path(&self) -> String {
        format!("{}?row={}&col={}", endpoints::VALID_MOVES, self.row, self.col)
    }
}

/// Body of `POST /move`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub from_row: u8,
    pub from_col: u8,
    pub to_row: u8,
    pub to_col: u8,
    /// Lower-case piece kind to promote to; serialized as `null` when absent
    pub promotion: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_move_request_serializes_null_promotion() {
        let req = MoveRequest {
            from_row: 6,
            from_col: 0,
            to_row: 5,
            to_col: 0,
            promotion: None,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"from_row": 6, "from_col": 0, "to_row": 5, "to_col": 0, "promotion": null})
        );
    }

    #[test]
    fn test_valid_moves_path() {
        let query = ValidMovesQuery { row: 6, col: 3 };
        assert_eq!(query.path(), "/valid_moves?row=6&col=3");
    }

    #[test]
    fn test_move_request_with_promotion() {
        let req = MoveRequest {
            from_row: 6,
            from_col: 4,
            to_row: 7,
            to_col: 4,
            promotion: Some("knight".to_string()),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["promotion"], "knight");
    }
}
