pub mod board;
pub mod r#move;
pub mod types;

pub use board::{Board, Cell, DEFAULT_COLS, DEFAULT_ROWS};
pub use r#move::Move;
pub use types::{PlayerId, Position};
