//! boardsync Protocol - Wire types for talking to the chess game server
//!
//! This crate contains every type that crosses the network:
//! - The push-channel notification envelope (`ServerMessage`)
//! - The game-state document shared by the push channel and `GET /game_state`
//! - REST request/response bodies for legal-move queries and actions
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde and serde_json
//! 2. **No business logic** - Pure data types and serialization
//! 3. **Forward compatible** - Unknown message kinds and optional fields never fail parsing

pub mod dto;
pub mod endpoints;
pub mod messages;
pub mod requests;
pub mod responses;

pub use dto::{CastlingRightsDoc, ColorDoc, GameStateDoc, PieceDoc, SideCastlingDoc};
pub use messages::ServerMessage;
pub use requests::{MoveRequest, ValidMovesQuery};
pub use responses::{ActionResponse, MoveDoc, ValidMovesResponse};
