//! Translates a `GameState` into the renderer's `RenderBoard`
//!
//! Pure and total: the board is recomputed from scratch on every call, so the
//! rendered view can never drift from the snapshot it came from.

use boardsync_domain::{Cell, GameState};

use crate::state::{RenderBoard, RenderStatus, RenderToken, TurnCode};

/// Translate a full snapshot.
pub fn translate(state: &GameState) -> RenderBoard {
    let rows = state
        .board
        .rows()
        .map(|row| row.iter().map(translate_cell).collect())
        .collect();

    let status = RenderStatus {
        check: state.status.check,
        checkmate: state.status.checkmate,
        stalemate: state.status.stalemate,
    };

    RenderBoard::new(rows, TurnCode::of(state.current_player), status)
}

/// Token for a single cell.
pub fn translate_cell(cell: &Cell) -> RenderToken {
    match cell {
        Cell::Empty => RenderToken::empty(),
        Cell::Piece(piece) => RenderToken::piece(piece.color, piece.kind),
        // No kind code available: emit the color code with an empty kind segment
        Cell::Unrecognized { color, .. } => RenderToken::color_only(*color),
    }
}
