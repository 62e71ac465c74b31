//! Push-channel message types
//!
//! The server only pushes; the client never writes application messages to
//! the channel. Notifications are JSON objects discriminated by `type`.

use serde::{Deserialize, Serialize};

use crate::dto::GameStateDoc;

/// Messages from the server over the push channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Full replacement of the game state
    GameState { state: GameStateDoc },
    /// Any message kind this client does not understand
    #[serde(other)]
    Unknown,
}
