pub mod name;

pub use name::{is_valid_player_name, prompt_player_name};

use crate::core::PlayerId;

/// A seated player: identity plus the name entered at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    pub fn new(id: PlayerId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }
}

/// Both players, fixed for the whole game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Players {
    one: Player,
    two: Player,
}

impl Players {
    pub fn new(one: &str, two: &str) -> Self {
        Self {
            one: Player::new(PlayerId::Player1, one),
            two: Player::new(PlayerId::Player2, two),
        }
    }

    pub fn get(&self, id: PlayerId) -> &Player {
        match id {
            PlayerId::Player1 => &self.one,
            PlayerId::Player2 => &self.two,
        }
    }

    pub fn name(&self, id: PlayerId) -> &str {
        &self.get(id).name
    }
}
