//! Plain-text renderer used by the `boardsync-player` binary

use std::fmt::Write as _;
use std::io::Write;
use std::sync::Mutex;

use boardsync_domain::Color;

use crate::ports::outbound::RendererPort;
use crate::state::{RenderBoard, TurnCode};

/// Draws boards as a text grid on any writer (stdout by default).
pub struct TerminalRenderer<W: Write + Send> {
    out: Mutex<W>,
}

impl TerminalRenderer<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }

    fn emit(&self, text: &str) {
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
            tracing::warn!("Failed to write to terminal: {}", e);
        }
    }
}

/// Row-by-row text grid with coordinates. Empty cells print as `..`.
pub fn format_board(board: &RenderBoard) -> String {
    let mut text = String::from("    0  1  2  3  4  5  6  7\n");
    for (row, tokens) in board.rows().iter().enumerate() {
        let _ = write!(text, "{row} ");
        for token in tokens {
            let cell = if token.is_empty() { ".." } else { token.as_str() };
            let _ = write!(text, " {cell:<2}");
        }
        text.push('\n');
    }

    let status = board.status();
    if status.checkmate {
        text.push_str("Checkmate!\n");
    } else if status.stalemate {
        text.push_str("Stalemate!\n");
    } else if status.check {
        text.push_str("Check!\n");
    }
    text
}

pub fn format_turn(turn: TurnCode) -> String {
    let side = match turn.color() {
        Color::White => "White",
        Color::Black => "Black",
    };
    format!("{side} to move ({turn})\n")
}

impl<W: Write + Send> RendererPort for TerminalRenderer<W> {
    fn render_board(&self, board: &RenderBoard) {
        self.emit(&format_board(board));
    }

    fn update_turn_display(&self, turn: TurnCode) {
        self.emit(&format_turn(turn));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::board_translator::translate;
    use crate::infrastructure::testing::fixtures;

    #[test]
    fn test_format_board_layout() {
        let board = translate(&fixtures::standard_state(Color::White));
        let text = format_board(&board);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[1], "0  bR bN bB bQ bK bB bN bR");
        assert_eq!(lines[4], "3  .. .. .. .. .. .. .. ..");
        assert_eq!(lines[8], "7  wR wN wB wQ wK wB wN wR");
    }

    #[test]
    fn test_renderer_writes_board_then_turn() {
        let renderer = TerminalRenderer::new(Vec::new());
        let board = translate(&fixtures::standard_state(Color::Black));

        renderer.render_board(&board);
        renderer.update_turn_display(board.turn());

        let written = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(written.starts_with("    0  1"));
        assert!(written.ends_with("Black to move (b)\n"));
    }
}
