//! Board value objects
//!
//! The board is always 8x8. Rows and columns are zero-based and match the
//! game server's indexing (row 0 is the first rank the server sends).

use std::fmt;

use crate::{Color, DomainError, Piece};

/// Number of rows and columns on the board
pub const BOARD_SIZE: usize = 8;

/// A validated board coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Create a square, rejecting coordinates outside 0..8.
    pub fn new(row: i64, col: i64) -> Result<Self, DomainError> {
        let size = BOARD_SIZE as i64;
        if !(0..size).contains(&row) || !(0..size).contains(&col) {
            return Err(DomainError::out_of_range(row, col));
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Contents of one board cell
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Piece(Piece),
    /// A piece whose kind is not in the client's table.
    ///
    /// Kept so the rest of the board can still render; the renderer shows
    /// the color only.
    Unrecognized { color: Color, name: String },
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn piece(&self) -> Option<Piece> {
        match self {
            Cell::Piece(piece) => Some(*piece),
            _ => None,
        }
    }
}

/// Full 8x8 board, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: vec![Cell::Empty; BOARD_SIZE * BOARD_SIZE],
        }
    }

    /// Build a board from row vectors, requiring exactly 8 rows of 8 cells.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, DomainError> {
        if rows.len() != BOARD_SIZE {
            return Err(DomainError::validation(format!(
                "board must have {} rows, got {}",
                BOARD_SIZE,
                rows.len()
            )));
        }

        let mut cells = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != BOARD_SIZE {
                return Err(DomainError::validation(format!(
                    "row {} must have {} cells, got {}",
                    index,
                    BOARD_SIZE,
                    row.len()
                )));
            }
            cells.extend(row);
        }

        Ok(Self { cells })
    }

    pub fn cell(&self, square: Square) -> &Cell {
        &self.cells[square.index()]
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cell(square).piece()
    }

    /// Builder-style placement, mostly useful for fixtures.
    pub fn with_cell(mut self, square: Square, cell: Cell) -> Self {
        self.cells[square.index()] = cell;
        self
    }

    /// Iterate rows in server order.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(BOARD_SIZE)
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }
}
