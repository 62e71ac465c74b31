//! Client-side state slots.
//!
//! Everything here is process-wide and has a single writer; readers see the
//! latest published value.

pub mod game_store;
pub mod legal_moves;
pub mod render_board;

pub use game_store::GameStore;
pub use legal_moves::{LegalMoveSelection, Selection, SelectionTicket};
pub use render_board::{RenderBoard, RenderStatus, RenderToken, TurnCode, EMPTY_TOKEN};
