//! Renderer-facing board representation
//!
//! A `RenderBoard` is derived from a `GameState` and never edited by hand.
//! Each cell is a compact token: a color code followed by a piece-kind code
//! (`"bR"`, `"wP"`), or the `"empty"` sentinel.

use std::fmt;

use boardsync_domain::{Color, PieceKind, BOARD_SIZE};

/// Sentinel token for an empty cell
pub const EMPTY_TOKEN: &str = "empty";

/// One cell of a [`RenderBoard`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenderToken(String);

impl RenderToken {
    pub fn empty() -> Self {
        Self(EMPTY_TOKEN.to_string())
    }

    pub fn piece(color: Color, kind: PieceKind) -> Self {
        Self(format!("{}{}", color.code(), kind.code()))
    }

    /// Token for a piece whose kind has no code: the color code alone.
    pub fn color_only(color: Color) -> Self {
        Self(color.code().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == EMPTY_TOKEN
    }

    /// Decode an occupied token back into its (color, kind) pair.
    ///
    /// Returns `None` for the empty sentinel and for degraded color-only
    /// tokens.
    pub fn decode(&self) -> Option<(Color, PieceKind)> {
        let mut chars = self.0.chars();
        let color = Color::from_code(chars.next()?)?;
        let kind = PieceKind::from_code(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some((color, kind))
    }
}

impl fmt::Display for RenderToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compact code of the side to move (`"w"` or `"b"`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TurnCode(Color);

impl TurnCode {
    pub fn of(color: Color) -> Self {
        Self(color)
    }

    pub fn color(self) -> Color {
        self.0
    }

    pub fn as_char(self) -> char {
        self.0.code()
    }
}

impl fmt::Display for TurnCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Check / end-of-game flags carried alongside the board for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStatus {
    pub check: bool,
    pub checkmate: bool,
    pub stalemate: bool,
}

/// Translated 8x8 board plus the turn code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderBoard {
    rows: Vec<Vec<RenderToken>>,
    turn: TurnCode,
    status: RenderStatus,
}

impl RenderBoard {
    /// Assemble a board. Callers are expected to pass exactly 8x8 tokens;
    /// the translator is the only producer.
    pub(crate) fn new(rows: Vec<Vec<RenderToken>>, turn: TurnCode, status: RenderStatus) -> Self {
        debug_assert_eq!(rows.len(), BOARD_SIZE);
        Self { rows, turn, status }
    }

    pub fn token(&self, row: usize, col: usize) -> Option<&RenderToken> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    pub fn rows(&self) -> &[Vec<RenderToken>] {
        &self.rows
    }

    pub fn turn(&self) -> TurnCode {
        self.turn
    }

    pub fn status(&self) -> RenderStatus {
        self.status
    }
}
