//! Line commands accepted by the terminal front end

use boardsync_domain::{DomainError, PieceKind, Square};
use thiserror::Error;

pub const HELP: &str = "\
commands:
  moves <row> <col>                          list legal moves for a piece
  move <row> <col> <to_row> <to_col> [piece] submit a move (piece = promotion)
  new                                        start a new game
  refresh                                    pull the current state
  status                                     show connection status
  help                                       this text
  quit                                       exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Moves(Square),
    Move {
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    },
    NewGame,
    Refresh,
    Status,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("not a coordinate: {0}")]
    Coordinate(String),
    #[error("a pawn cannot promote to a {0}")]
    Promotion(PieceKind),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl Command {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&name, args)) = words.split_first() else {
            return Ok(None);
        };

        let command = match (name.to_ascii_lowercase().as_str(), args) {
            ("moves", [row, col]) => Command::Moves(square(row, col)?),
            ("moves", _) => return Err(CommandError::Usage("moves <row> <col>")),
            ("move", [row, col, to_row, to_col, rest @ ..]) if rest.len() <= 1 => {
                let promotion = match rest.first() {
                    Some(piece) => Some(promotion(piece)?),
                    None => None,
                };
                Command::Move {
                    from: square(row, col)?,
                    to: square(to_row, to_col)?,
                    promotion,
                }
            }
            ("move", _) => {
                return Err(CommandError::Usage(
                    "move <row> <col> <to_row> <to_col> [piece]",
                ))
            }
            ("new", []) => Command::NewGame,
            ("refresh", []) => Command::Refresh,
            ("status", []) => Command::Status,
            ("help" | "?", _) => Command::Help,
            ("quit" | "exit" | "q", _) => Command::Quit,
            _ => return Err(CommandError::Unknown(line.trim().to_string())),
        };
        Ok(Some(command))
    }
}

fn coordinate(word: &str) -> Result<i64, CommandError> {
    word.parse::<i64>()
        .map_err(|_| CommandError::Coordinate(word.to_string()))
}

fn promotion(word: &str) -> Result<PieceKind, CommandError> {
    let kind = word.to_ascii_lowercase().parse::<PieceKind>()?;
    if !kind.is_promotion_target() {
        return Err(CommandError::Promotion(kind));
    }
    Ok(kind)
}

fn square(row: &str, col: &str) -> Result<Square, CommandError> {
    Ok(Square::new(coordinate(row)?, coordinate(col)?)?)
}
