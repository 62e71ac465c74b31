//! Render Bridge - hands translated boards to the external renderer
//!
//! The bridge keeps the last published board so late readers (a status bar,
//! a renderer registered after the first update) can pick it up. Publishing
//! before a renderer is registered only updates that slot.

use std::sync::{Arc, RwLock};

use crate::ports::outbound::RendererPort;
use crate::state::{RenderBoard, TurnCode};

#[derive(Default)]
pub struct RenderBridge {
    renderer: RwLock<Option<Arc<dyn RendererPort>>>,
    published: RwLock<Option<RenderBoard>>,
}

impl RenderBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_renderer(renderer: Arc<dyn RendererPort>) -> Self {
        let bridge = Self::new();
        bridge.register(renderer);
        bridge
    }

    /// Install (or replace) the renderer that receives future updates.
    pub fn register(&self, renderer: Arc<dyn RendererPort>) {
        *self.renderer.write().unwrap_or_else(|e| e.into_inner()) = Some(renderer);
    }

    pub fn has_renderer(&self) -> bool {
        self.renderer
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }

    /// Store `board` as the published state and refresh the renderer.
    pub fn publish(&self, board: RenderBoard) {
        {
            let mut published = self.published.write().unwrap_or_else(|e| e.into_inner());
            *published = Some(board.clone());
        }

        // Clone the renderer out so no lock is held while it draws
        let renderer = self
            .renderer
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone();

        match renderer {
            Some(renderer) => {
                renderer.render_board(&board);
                renderer.update_turn_display(board.turn());
            }
            None => tracing::trace!("No renderer registered; board stored only"),
        }
    }

    /// The last published board, or `None` before the first game state.
    pub fn snapshot(&self) -> Option<RenderBoard> {
        self.published
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn turn(&self) -> Option<TurnCode> {
        self.published
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
            .map(RenderBoard::turn)
    }
}
