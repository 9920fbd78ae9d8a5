use std::path::PathBuf;

/// Errors raised when constructing a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board dimensions must be non-zero (got {rows}x{cols})")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("board of {rows}x{cols} cells is too large")]
    TooLarge { rows: usize, cols: usize },

    #[error("board holds {actual} cells, expected {expected}")]
    CellCount { expected: usize, actual: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that end a session early. Bad names and bad moves are not errors;
/// they are re-prompted.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("input closed before the game finished")]
    InputClosed,

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_display() {
        let err = BoardError::InvalidDimensions { rows: 0, cols: 5 };
        assert_eq!(
            err.to_string(),
            "board dimensions must be non-zero (got 0x5)"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board.rows must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board.rows must be > 0"
        );
    }

    #[test]
    fn test_game_error_wraps_board_error() {
        let err: GameError = BoardError::InvalidDimensions { rows: 3, cols: 0 }.into();
        assert_eq!(
            err.to_string(),
            "board dimensions must be non-zero (got 3x0)"
        );
        assert_eq!(
            BoardError::TooLarge { rows: 9, cols: 9 }.to_string(),
            "board of 9x9 cells is too large"
        );
        assert_eq!(
            GameError::InputClosed.to_string(),
            "input closed before the game finished"
        );
    }
}
