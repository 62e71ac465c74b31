//! Action Proxy - submits user intents to the game server
//!
//! Results are submission-level only. Nothing here touches the game store:
//! an accepted move shows up later as a push notification, never through the
//! response to the request that caused it.

use std::sync::Arc;

use boardsync_domain::{LegalMove, PieceKind, Square};
use boardsync_protocol::{endpoints, ActionResponse, MoveRequest, ValidMovesQuery, ValidMovesResponse};

use crate::application::ServiceError;
use crate::infrastructure::state_converters::{legal_move_from_doc, promotion_to_wire};
use crate::ports::outbound::{GameClient, RawApiPort};
use crate::state::LegalMoveSelection;

#[derive(Clone)]
pub struct ActionProxy {
    api: Arc<dyn RawApiPort>,
    selection: Arc<LegalMoveSelection>,
}

impl ActionProxy {
    pub fn new(api: Arc<dyn RawApiPort>) -> Self {
        Self {
            api,
            selection: Arc::new(LegalMoveSelection::new()),
        }
    }

    pub fn selection(&self) -> &Arc<LegalMoveSelection> {
        &self.selection
    }

    /// Select a square and record its legal moves in the selection slot.
    ///
    /// Returns `None` when a newer selection superseded this one before the
    /// server answered.
    pub async fn select_square(&self, square: Square) -> Option<Vec<LegalMove>> {
        let ticket = self.selection.begin(square);
        let moves = self.query_legal_moves(square).await;
        if self.selection.complete(ticket, moves.clone()) {
            Some(moves)
        } else {
            None
        }
    }

    async fn try_query_legal_moves(&self, from: Square) -> Result<Vec<LegalMove>, ServiceError> {
        let query = ValidMovesQuery {
            row: from.row(),
            col: from.col(),
        };
        let value = self.api.get_json(&query.path()).await?;
        let response: ValidMovesResponse = serde_json::from_value(value)?;

        let mut moves = Vec::with_capacity(response.moves.len());
        for doc in response.moves {
            moves.push(legal_move_from_doc(doc)?);
        }
        Ok(moves)
    }

    async fn try_submit_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<ActionResponse, ServiceError> {
        let request = MoveRequest {
            from_row: from.row(),
            from_col: from.col(),
            to_row: to.row(),
            to_col: to.col(),
            promotion: promotion_to_wire(promotion),
        };
        let body = serde_json::to_value(&request)?;
        let value = self.api.post_json(endpoints::MOVE, &body).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn try_request_new_game(&self) -> Result<ActionResponse, ServiceError> {
        let value = self.api.post_empty(endpoints::NEW_GAME).await?;
        Ok(serde_json::from_value(value)?)
    }
}

#[async_trait::async_trait]
impl GameClient for ActionProxy {
    async fn query_legal_moves(&self, from: Square) -> Vec<LegalMove> {
        match self.try_query_legal_moves(from).await {
            Ok(moves) => moves,
            Err(e) => {
                tracing::error!(square = %from, error = %e, "Error getting valid moves");
                Vec::new()
            }
        }
    }

    async fn submit_move(&self, from: Square, to: Square, promotion: Option<PieceKind>) -> bool {
        match self.try_submit_move(from, to, promotion).await {
            Ok(ActionResponse { success: true, .. }) => {
                tracing::debug!(%from, %to, "Move accepted; waiting for state push");
                true
            }
            Ok(ActionResponse { message, .. }) => {
                tracing::info!(
                    %from,
                    %to,
                    reason = message.as_deref().unwrap_or("unspecified"),
                    "Move rejected by server"
                );
                false
            }
            Err(e) => {
                tracing::error!(%from, %to, error = %e, "Error making move");
                false
            }
        }
    }

    async fn request_new_game(&self) -> bool {
        match self.try_request_new_game().await {
            Ok(response) => {
                if !response.success {
                    tracing::info!(
                        reason = response.message.as_deref().unwrap_or("unspecified"),
                        "New game rejected by server"
                    );
                }
                response.success
            }
            Err(e) => {
                tracing::error!(error = %e, "Error starting new game");
                false
            }
        }
    }
}
