//! Connection status shared between the connection manager and observers.
//!
//! The status lives in an `AtomicU8` so any number of observers (a status
//! indicator, tests) can read it without touching the manager.

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// Connectivity of the push channel, as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// Attempting to establish the channel
    Connecting,
    /// Channel open
    Connected,
    /// Channel closed; a reconnection may be pending
    Disconnected,
}

impl ConnectionStatus {
    /// Convert to u8 for atomic storage.
    pub fn to_u8(self) -> u8 {
        match self {
            ConnectionStatus::Disconnected => 0,
            ConnectionStatus::Connecting => 1,
            ConnectionStatus::Connected => 2,
        }
    }

    /// Convert from u8 (atomic storage).
    pub fn from_u8(v: u8) -> Self {
        match v {
            1 => ConnectionStatus::Connecting,
            2 => ConnectionStatus::Connected,
            _ => ConnectionStatus::Disconnected,
        }
    }

    /// Text for a status indicator
    pub fn label(self) -> &'static str {
        match self {
            ConnectionStatus::Connecting => "Connecting to server...",
            ConnectionStatus::Connected => "Connected",
            ConnectionStatus::Disconnected => "Disconnected",
        }
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Observable connection status for UI binding.
///
/// Cheap to clone; every clone reads the same underlying state.
#[derive(Clone)]
pub struct ConnectionStatusObserver {
    state: Arc<AtomicU8>,
}

impl ConnectionStatusObserver {
    /// Create a new observer from a shared state Arc.
    pub fn new(state: Arc<AtomicU8>) -> Self {
        Self { state }
    }

    /// Get the current connection status.
    pub fn status(&self) -> ConnectionStatus {
        ConnectionStatus::from_u8(self.state.load(Ordering::SeqCst))
    }

    /// Check if currently connected.
    pub fn is_connected(&self) -> bool {
        self.status() == ConnectionStatus::Connected
    }
}

/// Store `new_status`, returning the previous value.
pub fn set_connection_status(state_ref: &AtomicU8, new_status: ConnectionStatus) -> ConnectionStatus {
    ConnectionStatus::from_u8(state_ref.swap(new_status.to_u8(), Ordering::SeqCst))
}
