//! Outbound ports - Interfaces for external collaborators
//!
//! These ports define the contracts that infrastructure adapters (or the
//! embedding application) must implement, so the synchronization core never
//! depends on a concrete HTTP client or renderer.

pub mod game_client_port;
pub mod raw_api_port;
pub mod renderer_port;

pub use game_client_port::GameClient;
pub use raw_api_port::{ApiError, RawApiPort};
pub use renderer_port::RendererPort;

#[cfg(test)]
pub use raw_api_port::MockRawApiPort;
#[cfg(test)]
pub use renderer_port::MockRendererPort;
