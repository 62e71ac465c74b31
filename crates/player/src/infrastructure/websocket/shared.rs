//! Shared helpers for the push-channel client.
//!
//! Runtime-agnostic: no tokio here, so the parsing rules can be tested without
//! a socket.

use boardsync_protocol::{GameStateDoc, ServerMessage};

/// Fixed delay between a channel closing and the next connection attempt.
pub const DEFAULT_RECONNECT_DELAY_MS: u64 = 5_000;

/// Parsed server notification with the state update lifted out.
#[derive(Debug)]
pub enum ParsedServerMessage {
    GameState(Box<GameStateDoc>),
    /// A well-formed notification of a kind this client does not act on
    Ignored,
}

pub fn parse_server_message(text: &str) -> Result<ParsedServerMessage, serde_json::Error> {
    let msg: ServerMessage = serde_json::from_str(text)?;
    Ok(match msg {
        ServerMessage::GameState { state } => ParsedServerMessage::GameState(Box::new(state)),
        ServerMessage::Unknown => ParsedServerMessage::Ignored,
    })
}
