//! Application layer: services that talk to the server through ports, and
//! the bridge that hands translated boards to the renderer.

pub mod error;
pub mod render_bridge;
pub mod services;

pub use error::ServiceError;
pub use render_bridge::RenderBridge;
pub use services::{ActionProxy, StateFetcher};
