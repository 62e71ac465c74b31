//! Test fixtures shared by unit and integration tests.
//!
//! The standard arrangement puts black on rows 0-1 and white on rows 6-7,
//! so `[0][0]` holds a black rook.

use boardsync_domain::GameState;
use boardsync_protocol::{ColorDoc, GameStateDoc, PieceDoc, ServerMessage};
use serde_json::Value;

use crate::infrastructure::state_converters::game_state_from_doc;

const BACK_RANK: [&str; 8] = [
    "rook", "knight", "bishop", "queen", "king", "bishop", "knight", "rook",
];

/// Standard opening arrangement with `current_player` to move.
pub fn standard_doc(current_player: ColorDoc) -> GameStateDoc {
    let mut doc = GameStateDoc::empty(current_player);
    for (col, kind) in BACK_RANK.iter().enumerate() {
        doc.board[0][col] = Some(PieceDoc::new(ColorDoc::Black, *kind));
        doc.board[1][col] = Some(PieceDoc::new(ColorDoc::Black, "pawn"));
        doc.board[6][col] = Some(PieceDoc::new(ColorDoc::White, "pawn"));
        doc.board[7][col] = Some(PieceDoc::new(ColorDoc::White, *kind));
    }
    doc
}

/// Same arrangement as [`standard_doc`], as raw JSON.
pub fn standard_doc_json(current_player: &str) -> Value {
    let color = if current_player == "black" {
        ColorDoc::Black
    } else {
        ColorDoc::White
    };
    serde_json::to_value(standard_doc(color)).unwrap_or(Value::Null)
}

/// `game_state` push notification wrapping `doc`, serialized as text.
pub fn push_text(doc: GameStateDoc) -> String {
    serde_json::to_string(&ServerMessage::GameState { state: doc }).unwrap_or_default()
}

/// Standard arrangement as a domain value.
pub fn standard_state(current_player: boardsync_domain::Color) -> GameState {
    let color = match current_player {
        boardsync_domain::Color::White => ColorDoc::White,
        boardsync_domain::Color::Black => ColorDoc::Black,
    };
    match game_state_from_doc(standard_doc(color)) {
        Ok(state) => state,
        Err(e) => panic!("standard fixture must convert: {e}"),
    }
}

/// Standard arrangement with the piece at `row`/`col` moved to `to_row`/`to_col`.
pub fn doc_after_move(
    current_player: ColorDoc,
    (row, col): (usize, usize),
    (to_row, to_col): (usize, usize),
) -> GameStateDoc {
    let mut doc = standard_doc(current_player);
    let piece = doc.board[row][col].take();
    doc.board[to_row][to_col] = piece;
    doc
}
