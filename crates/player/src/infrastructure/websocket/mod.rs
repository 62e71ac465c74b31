//! Push-channel client for the game server
//!
//! - `core`: lifecycle state machine and retry schedule (no runtime)
//! - `shared`: notification parsing and reconnect constants
//! - `client`: tokio-tungstenite socket, read one frame at a time
//! - `connection_manager`: the task that ties them together

mod client;
mod core;
mod shared;

pub mod connection_manager;

pub use client::{Frame, PushChannel, SessionEnd};
pub use connection_manager::ConnectionManager;
pub use self::core::{LifecycleEvent, LifecycleState, RetrySchedule};
pub use shared::{parse_server_message, ParsedServerMessage, DEFAULT_RECONNECT_DELAY_MS};
