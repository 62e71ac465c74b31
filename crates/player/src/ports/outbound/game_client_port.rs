//! Game Client Port - user intents submitted to the game server
//!
//! The input layer is constructed against this trait. Implementations only
//! report whether a submission was accepted; the resulting game state always
//! arrives later through the push channel.

use boardsync_domain::{LegalMove, PieceKind, Square};

#[async_trait::async_trait]
pub trait GameClient: Send + Sync {
    /// Legal destinations for the piece on `from`.
    ///
    /// An empty result means "no information": either the piece has no moves
    /// or the request failed.
    async fn query_legal_moves(&self, from: Square) -> Vec<LegalMove>;

    /// Submit a move. `true` means the server accepted it and will broadcast
    /// the new state; it does not mean the local state has changed.
    async fn submit_move(&self, from: Square, to: Square, promotion: Option<PieceKind>) -> bool;

    /// Ask the server to start a new game. Same acceptance semantics as
    /// [`GameClient::submit_move`].
    async fn request_new_game(&self) -> bool;
}
