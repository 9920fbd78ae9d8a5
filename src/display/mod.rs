use crate::core::{Board, Cell, PlayerId, Position};
use serde::{Deserialize, Serialize};

/// 表示用の記号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenSymbols {
    pub player_one: char,
    pub player_two: char,
    pub empty: char,
}

impl Default for TokenSymbols {
    fn default() -> Self {
        Self {
            player_one: 'X',
            player_two: 'O',
            empty: ' ',
        }
    }
}

impl TokenSymbols {
    pub fn symbol(&self, cell: Cell) -> char {
        match cell {
            Cell::Empty => self.empty,
            Cell::Occupied(PlayerId::Player1) => self.player_one,
            Cell::Occupied(PlayerId::Player2) => self.player_two,
        }
    }
}

/// Render a board as text lines, top row first.
///
/// Every cell is drawn as `" c |"`. A dash line as wide as the content row
/// follows each row except the last.
pub fn render_board<'a>(
    board: &'a Board,
    symbols: &'a TokenSymbols,
) -> impl Iterator<Item = String> + 'a {
    let last = board.rows() - 1;
    (0..board.rows()).flat_map(move |row| {
        let line = render_row(board, symbols, row);
        let separator = (row < last).then(|| "-".repeat(line.chars().count()));
        std::iter::once(line).chain(separator)
    })
}

fn render_row(board: &Board, symbols: &TokenSymbols, row: usize) -> String {
    (0..board.cols())
        .map(|col| format!(" {} |", symbols.symbol(board.get(Position::new(row, col)))))
        .collect()
}
