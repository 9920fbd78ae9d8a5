use super::board::Cell;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Player identity. Player1 always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlayerId {
    #[default]
    Player1,
    Player2,
}

impl PlayerId {
    pub fn opponent(self) -> PlayerId {
        match self {
            PlayerId::Player1 => PlayerId::Player2,
            PlayerId::Player2 => PlayerId::Player1,
        }
    }

    /// The cell value this player's moves write to the board.
    pub fn token(self) -> Cell {
        Cell::Occupied(self)
    }

    /// 1-based number used in prompts ("Player 1").
    pub fn number(self) -> u8 {
        match self {
            PlayerId::Player1 => 1,
            PlayerId::Player2 => 2,
        }
    }
}

/// Board coordinate (0-indexed), always within the board it was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
