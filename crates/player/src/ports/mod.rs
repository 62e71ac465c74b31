//! Player port definitions.
//!
//! Outbound ports are the seams between the synchronization core and the
//! outside world: the game server's REST surface, the renderer, and the
//! user-intent interface the input layer is built against.

pub mod outbound;
