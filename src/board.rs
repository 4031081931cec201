use std::fmt;

use thiserror::Error;

use crate::command::Direction;
use crate::square::Square;

/// Error type for board loading.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("empty board")]
    Empty,
    #[error("unrecognized symbol '{symbol}' at row {row}, column {col}")]
    UnknownSymbol { symbol: char, row: usize, col: usize },
    #[error("chest '{0}' appears more than once")]
    DuplicateChest(char),
    #[error("no player found on board")]
    NoPlayer,
    #[error("multiple players found on board")]
    MultiplePlayers,
}

/// A (row, column) coordinate pair, 0-based. Components are signed so that
/// off-board neighbors (row -1 and the like) are representable and get
/// rejected by `Board::is_in_range` instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Position {
        Position { row, col }
    }

    /// The adjacent position one step in the given direction.
    pub fn step(self, dir: Direction) -> Position {
        let (dr, dc) = dir.delta();
        Position {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An ordered sequence of rows of squares. Rows may have different lengths;
/// no implicit padding is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: Vec<Vec<Square>>,
}

impl Board {
    /// Parse a board from text: one line per row, one symbol per square
    /// (see `Square::from_symbol` for the alphabet).
    pub fn from_text(text: &str) -> Result<Board, BoardError> {
        let mut rows = Vec::new();
        for (row, line) in text.lines().enumerate() {
            let mut squares = Vec::new();
            for (col, ch) in line.chars().enumerate() {
                let square = Square::from_symbol(ch).ok_or(BoardError::UnknownSymbol {
                    symbol: ch,
                    row,
                    col,
                })?;
                squares.push(square);
            }
            rows.push(squares);
        }
        if rows.is_empty() {
            return Err(BoardError::Empty);
        }
        Ok(Board { rows })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn row_len(&self, row: usize) -> usize {
        self.rows[row].len()
    }

    /// Range check against this board's actual dimensions. Rows may have
    /// unequal lengths, so the column is checked against the specific row.
    pub fn is_in_range(&self, pos: Position) -> bool {
        0 <= pos.row
            && (pos.row as usize) < self.rows.len()
            && 0 <= pos.col
            && (pos.col as usize) < self.rows[pos.row as usize].len()
    }

    /// Read a square. The position must already have been range-checked;
    /// out-of-range access is a programming error and panics.
    pub fn get(&self, pos: Position) -> Square {
        self.rows[pos.row as usize][pos.col as usize]
    }

    pub fn set(&mut self, pos: Position, square: Square) {
        self.rows[pos.row as usize][pos.col as usize] = square;
    }

    /// Iterate all squares with their positions, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Square)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, squares)| {
            squares
                .iter()
                .enumerate()
                .map(move |(col, &square)| (Position::new(row as i32, col as i32), square))
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for square in row {
                write!(f, "{}", square.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
