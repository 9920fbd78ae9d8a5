use super::types::{PlayerId, Position};
use std::fmt;

/// A single placement. Built from input, consumed by `place_token`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub to: Position,
    pub player: PlayerId,
}

impl Move {
    pub fn new(to: Position, player: PlayerId) -> Self {
        Move { to, player }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} -> {}", self.player, self.to)
    }
}
