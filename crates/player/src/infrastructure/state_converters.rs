//! Converters between wire documents and domain types
//!
//! The protocol crate stays free of domain types, so every conversion from a
//! server document into `boardsync_domain` happens here.

use boardsync_domain::{
    Board, CastlingRights, CastlingSide, Cell, Color, DomainError, GameState, GameStatus,
    LegalMove, Piece, PieceKind, SideCastlingRights, SpecialMove, Square,
};
use boardsync_protocol::{
    CastlingRightsDoc, ColorDoc, GameStateDoc, MoveDoc, PieceDoc, SideCastlingDoc,
};

pub fn color_from_doc(color: ColorDoc) -> Color {
    match color {
        ColorDoc::White => Color::White,
        ColorDoc::Black => Color::Black,
    }
}

/// Convert one wire piece. Unknown kinds degrade to `Cell::Unrecognized`.
pub fn cell_from_doc(piece: Option<PieceDoc>) -> Cell {
    let Some(piece) = piece else {
        return Cell::Empty;
    };
    let color = color_from_doc(piece.color);
    match piece.kind.parse::<PieceKind>() {
        Ok(kind) => Cell::Piece(Piece::new(color, kind)),
        Err(_) => {
            tracing::warn!(
                kind = %piece.kind,
                %color,
                "Unrecognized piece kind; rendering color only"
            );
            Cell::Unrecognized {
                color,
                name: piece.kind,
            }
        }
    }
}

fn side_rights_from_doc(side: SideCastlingDoc) -> SideCastlingRights {
    SideCastlingRights {
        king_side: side.king_side,
        queen_side: side.queen_side,
    }
}

fn castling_rights_from_doc(rights: CastlingRightsDoc) -> CastlingRights {
    CastlingRights {
        white: side_rights_from_doc(rights.white),
        black: side_rights_from_doc(rights.black),
    }
}

/// Convert a full game-state document.
///
/// Fails only on structural problems (board not 8x8); piece-level gaps are
/// tolerated.
pub fn game_state_from_doc(doc: GameStateDoc) -> Result<GameState, DomainError> {
    let rows = doc
        .board
        .into_iter()
        .map(|row| row.into_iter().map(cell_from_doc).collect())
        .collect();
    let board = Board::from_rows(rows)?;

    let status = GameStatus {
        check: doc.check,
        checkmate: doc.checkmate,
        stalemate: doc.stalemate,
    };

    let mut state = GameState::new(board, color_from_doc(doc.current_player)).with_status(status);
    if let Some(rights) = doc.castling_rights {
        state = state.with_castling_rights(castling_rights_from_doc(rights));
    }
    Ok(state)
}

/// Convert one entry of a `/valid_moves` response.
pub fn legal_move_from_doc(doc: MoveDoc) -> Result<LegalMove, DomainError> {
    let to = Square::new(doc.row, doc.col)?;
    let special = match doc.castling.as_deref() {
        Some("king_side") => Some(SpecialMove::Castling(CastlingSide::KingSide)),
        Some("queen_side") => Some(SpecialMove::Castling(CastlingSide::QueenSide)),
        Some(other) => {
            tracing::debug!(castling = %other, "Ignoring unknown castling annotation");
            None
        }
        None if doc.en_passant => Some(SpecialMove::EnPassant),
        None => None,
    };
    Ok(LegalMove { to, special })
}

/// Wire spelling of a promotion choice (`null` when none was chosen).
pub fn promotion_to_wire(promotion: Option<PieceKind>) -> Option<String> {
    promotion.map(|kind| kind.as_str().to_string())
}
