//! State Fetcher - one-shot pull of the authoritative game state
//!
//! Used once per successful push-channel connection to prime state before
//! the first notification arrives, and by the manual refresh hook.

use std::sync::Arc;

use boardsync_domain::GameState;
use boardsync_protocol::{endpoints, GameStateDoc};

use crate::application::ServiceError;
use crate::infrastructure::state_converters::game_state_from_doc;
use crate::ports::outbound::RawApiPort;

#[derive(Clone)]
pub struct StateFetcher {
    api: Arc<dyn RawApiPort>,
}

impl StateFetcher {
    pub fn new(api: Arc<dyn RawApiPort>) -> Self {
        Self { api }
    }

    /// Fetch the current game state.
    ///
    /// Any failure is logged and yields `None`; the caller keeps whatever
    /// state it already had.
    pub async fn fetch_state(&self) -> Option<GameState> {
        match self.try_fetch_state().await {
            Ok(state) => Some(state),
            Err(e) => {
                tracing::error!(error = %e, "Error fetching game state");
                None
            }
        }
    }

    async fn try_fetch_state(&self) -> Result<GameState, ServiceError> {
        let value = self.api.get_json(endpoints::GAME_STATE).await?;
        let doc: GameStateDoc = serde_json::from_value(value)?;
        Ok(game_state_from_doc(doc)?)
    }
}
