use super::types::{PlayerId, Position};
use crate::error::BoardError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ROWS: usize = 5;
pub const DEFAULT_COLS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(PlayerId),
}

/// Fixed-size grid. Dimensions never change after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Row-major cell storage, `rows * cols` long
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board. Both dimensions must be non-zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        let len = cell_count(rows, cols)?;
        Ok(Board {
            rows,
            cols,
            cells: vec![Cell::Empty; len],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Bounds-check signed coordinates coming from user input.
    pub fn position(&self, row: i64, col: i64) -> Option<Position> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        (row < self.rows && col < self.cols).then_some(Position::new(row, col))
    }

    /// Panics if `pos` lies outside the board.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[self.index(pos)]
    }

    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        let idx = self.index(pos);
        self.cells[idx] = cell;
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    pub fn row_cells(&self, row: usize) -> impl Iterator<Item = Cell> + '_ {
        self.cells[row * self.cols..(row + 1) * self.cols]
            .iter()
            .copied()
    }

    pub fn column_cells(&self, col: usize) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().skip(col).step_by(self.cols).copied()
    }

    fn index(&self, pos: Position) -> usize {
        assert!(
            pos.row < self.rows && pos.col < self.cols,
            "position {} outside {}x{} board",
            pos,
            self.rows,
            self.cols
        );
        pos.row * self.cols + pos.col
    }
}

/// 逆シリアライズ用: 寸法とセル数の整合性を検査してから Board にする
#[derive(Deserialize)]
struct RawBoard {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let expected = cell_count(raw.rows, raw.cols)?;
        if raw.cells.len() != expected {
            return Err(BoardError::CellCount {
                expected,
                actual: raw.cells.len(),
            });
        }
        Ok(Board {
            rows: raw.rows,
            cols: raw.cols,
            cells: raw.cells,
        })
    }
}

fn cell_count(rows: usize, cols: usize) -> Result<usize, BoardError> {
    if rows == 0 || cols == 0 {
        return Err(BoardError::InvalidDimensions { rows, cols });
    }
    rows.checked_mul(cols)
        .ok_or(BoardError::TooLarge { rows, cols })
}
