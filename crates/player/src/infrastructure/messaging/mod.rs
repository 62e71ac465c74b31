//! Connection status messaging.
//!
//! The connection manager is the only writer; everything else observes.

pub mod connection;

pub use connection::{set_connection_status, ConnectionStatus, ConnectionStatusObserver};
