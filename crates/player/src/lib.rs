//! boardsync Player - keeps a board display in sync with a remote chess engine.
//!
//! The server is the only source of truth. This crate owns the push channel,
//! pulls state when the channel opens, translates every state into the
//! renderer's compact board format, and proxies user intents back to the
//! server without ever applying their results locally.

pub mod application;
pub mod commands;
pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod state;

pub use application::{ActionProxy, RenderBridge, StateFetcher};
pub use config::ClientConfig;
pub use infrastructure::{ApiAdapter, ConnectionManager, ConnectionStatus};
pub use ports::outbound::{GameClient, RendererPort};
pub use state::{GameStore, RenderBoard};
