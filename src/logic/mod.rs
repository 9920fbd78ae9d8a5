use crate::core::{Board, Cell, Move, PlayerId, Position};

/// Number of tokens a row or column must hold to win. Matched exactly: a
/// line holding more than this does not count.
pub const WIN_COUNT: usize = 4;

/// 合法手判定: in bounds and the target cell is empty
pub fn is_valid_move(board: &Board, row: i64, col: i64) -> bool {
    board
        .position(row, col)
        .is_some_and(|pos| board.get(pos) == Cell::Empty)
}

/// Apply a move and return the new board.
///
/// The caller must have checked the move with [`is_valid_move`]. Placing on
/// an occupied cell trips a debug assertion; a position outside the board
/// panics.
pub fn place_token(board: &Board, mv: &Move) -> Board {
    debug_assert_eq!(
        board.get(mv.to),
        Cell::Empty,
        "place_token on occupied cell {}",
        mv.to
    );
    let mut next = board.clone();
    next.set(mv.to, mv.player.token());
    next
}

/// Did the token just placed at `pos` complete a line?
///
/// Only the row and column through `pos` are inspected, since no other line
/// can have changed.
pub fn check_winner(board: &Board, pos: Position, player: PlayerId) -> bool {
    let token = player.token();
    let in_row = board.row_cells(pos.row).filter(|&c| c == token).count();
    let in_col = board.column_cells(pos.col).filter(|&c| c == token).count();
    in_row == WIN_COUNT || in_col == WIN_COUNT
}
