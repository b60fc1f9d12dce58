use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{Color, GameError, Palette, Result};

/// Game settings, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cells along each side of the board.
    pub cells_per_axis: usize,
    pub palette: Palette,
    /// Palette entry selected as the replacement color when a session begins.
    pub initial_color: String,
    /// Fixed seed for board generation; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            cells_per_axis: 9,
            palette: Palette::default(),
            initial_color: "white".into(),
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| GameError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Falls back to defaults when the file is missing.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.cells_per_axis == 0 {
            return Err(GameError::Config("cells_per_axis must be > 0".into()));
        }
        if self.cells_per_axis > u16::MAX as usize {
            return Err(GameError::Config("cells_per_axis is too large".into()));
        }
        if self.palette.is_empty() {
            return Err(GameError::Config("palette must contain at least one color".into()));
        }
        if self.palette.get(&self.initial_color).is_none() {
            return Err(GameError::Config(format!(
                "initial_color '{}' is not in the palette",
                self.initial_color
            )));
        }
        Ok(())
    }

    pub fn initial_color(&self) -> Result<Color> {
        self.palette
            .get(&self.initial_color)
            .ok_or_else(|| GameError::UnknownColor(self.initial_color.clone()))
    }

    pub fn max_score(&self) -> u32 {
        (self.cells_per_axis * self.cells_per_axis) as u32
    }
}
