use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::coords::check_cell_size;
use crate::error::{Error, Result};

pub const DEFAULT_TILES_PATH: &str = "data/tiles.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Spatial units per grid cell.
    pub cell_size: f64,
    /// Random draws allowed per piece before placement gives up.
    pub placement_attempts: u32,
    /// Tile catalogue location.
    pub tiles: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        // A 16-cell board spans one spatial unit.
        Self {
            cell_size: 1.0 / 16.0,
            placement_attempts: 4096,
            tiles: PathBuf::from(DEFAULT_TILES_PATH),
        }
    }
}

impl Config {
    /// Load from a JSON file; missing fields keep their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Config> {
        let data = fs::read_to_string(path.as_ref())?;
        let config: Config = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        check_cell_size(self.cell_size)?;
        if self.placement_attempts == 0 {
            return Err(Error::InvalidConfig("placement_attempts must be at least 1".to_string()));
        }
        Ok(())
    }
}
