//! Renderer Port - capability exposed by the external board renderer
//!
//! The renderer owns all presentation. It is handed each freshly translated
//! board and must never reach back into the game state.

use crate::state::{RenderBoard, TurnCode};

#[cfg_attr(test, mockall::automock)]
pub trait RendererPort: Send + Sync {
    /// Redraw the board from a newly published translation.
    fn render_board(&self, board: &RenderBoard);

    /// Redraw the "whose turn" indicator.
    fn update_turn_display(&self, turn: TurnCode);
}
