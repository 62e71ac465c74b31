//! Paths served by the game server, relative to its base URL.

/// Push channel (WebSocket upgrade)
pub const WS: &str = "/ws";

/// `GET` current game-state document
pub const GAME_STATE: &str = "/game_state";

/// `GET` legal destinations for the piece at `row`/`col`
pub const VALID_MOVES: &str = "/valid_moves";

/// `POST` a move
pub const MOVE: &str = "/move";

/// `POST` to reset the game
pub const NEW_GAME: &str = "/new_game";
