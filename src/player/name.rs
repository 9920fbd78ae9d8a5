use crate::core::PlayerId;
use crate::error::GameError;
use crate::ui::Console;
use tracing::debug;

pub const INVALID_NAME_MSG: &str =
    "Invalid name.Please enter a valid name with only letters (no numbers or special characters)";

/// Names may contain alphabetic characters only. The empty name passes,
/// since it contains no offending character.
pub fn is_valid_player_name(name: &str) -> bool {
    name.chars().all(char::is_alphabetic)
}

/// Ask for a player's name until a valid one is entered.
pub fn prompt_player_name(console: &mut dyn Console, id: PlayerId) -> Result<String, GameError> {
    loop {
        console.write_line(&format!("Enter Player {}'s name:", id.number()))?;
        let name = console.read_line()?.ok_or(GameError::InputClosed)?;
        if is_valid_player_name(&name) {
            return Ok(name);
        }
        debug!(?id, %name, "rejected player name");
        console.alert(INVALID_NAME_MSG)?;
    }
}
