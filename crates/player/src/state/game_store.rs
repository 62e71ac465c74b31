//! Single slot holding the latest authoritative game state
//!
//! Only the connection manager's lifecycle task writes here. Every write
//! replaces the whole snapshot, retranslates it, and publishes the result to
//! the render bridge as one step: a reader never sees a held state whose
//! translation is not the published board.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use boardsync_domain::GameState;

use crate::application::render_bridge::RenderBridge;
use crate::infrastructure::board_translator;

pub struct GameStore {
    current: RwLock<Option<Arc<GameState>>>,
    version: AtomicU64,
    bridge: Arc<RenderBridge>,
    /// Serializes whole applies (store, version bump, publish)
    apply_lock: Mutex<()>,
}

impl GameStore {
    pub fn new(bridge: Arc<RenderBridge>) -> Self {
        Self {
            current: RwLock::new(None),
            version: AtomicU64::new(0),
            bridge,
            apply_lock: Mutex::new(()),
        }
    }

    /// Replace the held snapshot and publish its translation.
    pub(crate) fn apply(&self, state: GameState) {
        let _apply = self.apply_lock.lock().unwrap_or_else(|e| e.into_inner());

        let board = board_translator::translate(&state);
        let state = Arc::new(state);

        {
            let mut current = self.current.write().unwrap_or_else(|e| e.into_inner());
            *current = Some(state);
        }
        let version = self.version.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(version, turn = %board.turn(), "Game state replaced");

        self.bridge.publish(board);
    }

    /// The latest snapshot, if any has been received.
    pub fn current(&self) -> Option<Arc<GameState>> {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Number of snapshots applied so far.
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::SeqCst)
    }

    pub fn bridge(&self) -> &Arc<RenderBridge> {
        &self.bridge
    }
}
