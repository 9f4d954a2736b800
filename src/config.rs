use std::{io, path::Path};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{error::ConfigError, Board, BoardConfig, CodePeg, Error, Shield};

/// Game setup, loadable from TOML.
///
/// ```toml
/// shield = ["black", "blue", "green", "white"]
///
/// [board]
/// shield_size = 4
/// total_rows = 10
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Secret code. Optional so that a config can describe just the board.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shield: Option<Vec<CodePeg>>,
    pub board: BoardConfig,
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist. Any other read failure is an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "config file not found, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(ConfigError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }

    fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        self.board.validate()?;
        if let Some(shield) = &self.shield {
            if shield.is_empty() {
                return Err(Error::EmptyShield);
            }
            if shield.len() != self.board.shield_size {
                return Err(Error::ShieldLengthMismatch {
                    expected: self.board.shield_size,
                    actual: shield.len(),
                });
            }
        }
        Ok(())
    }

    /// A configured board with no shield.
    pub fn board(&self) -> Result<Board, Error> {
        Board::new(self.board)
    }

    /// A board with the configured shield already registered.
    pub fn active_board(&self) -> Result<Board, Error> {
        let colors = self.shield.as_deref().ok_or(Error::MissingShield)?;
        let mut board = self.board()?;
        board.register_shield(Shield::new(colors)?)?;
        Ok(board)
    }

    /// TOML with every default filled in.
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&GameConfig::default())
    }
}
