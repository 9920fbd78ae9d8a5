use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{Board, DEFAULT_COLS, DEFAULT_ROWS};
use crate::display::TokenSymbols;
use crate::error::{BoardError, ConfigError};

/// Default location of the optional config file, relative to the working directory.
pub const CONFIG_PATH: &str = "grid_four.json";

/// Largest accepted row or column count.
pub const MAX_DIMENSION: usize = 100;

/// Top-level game configuration, loadable from JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board: BoardConfig,
    pub symbols: TokenSymbols,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

impl BoardConfig {
    pub fn build(&self) -> Result<Board, BoardError> {
        Board::new(self.rows, self.cols)
    }
}

impl GameConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = serde_json::from_str(&content)?;
        config.validate()?;
        info!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Load configuration from a JSON file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            info!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.rows == 0 {
            return Err(ConfigError::Validation("board.rows must be > 0".into()));
        }
        if self.board.cols == 0 {
            return Err(ConfigError::Validation("board.cols must be > 0".into()));
        }
        if self.board.rows > MAX_DIMENSION || self.board.cols > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.rows and board.cols must be <= {MAX_DIMENSION}"
            )));
        }

        let s = &self.symbols;
        if s.player_one == s.player_two {
            return Err(ConfigError::Validation(
                "symbols.player_one and symbols.player_two must differ".into(),
            ));
        }
        if s.player_one == s.empty || s.player_two == s.empty {
            return Err(ConfigError::Validation(
                "player symbols must differ from symbols.empty".into(),
            ));
        }
        for (field, c) in [
            ("player_one", s.player_one),
            ("player_two", s.player_two),
            ("empty", s.empty),
        ] {
            if c == '|' || c == '-' || c.is_control() {
                return Err(ConfigError::Validation(format!(
                    "symbols.{field} may not be '|', '-' or a control character"
                )));
            }
        }
        Ok(())
    }
}
