use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::Robot;
use crate::walls::WallMask;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetColor {
    Red,
    Green,
    Blue,
    Yellow,
    Multi,
}

impl TargetColor {
    /// Whether a robot ending its move here completes this target.
    #[inline]
    pub fn accepts(self, robot: Robot) -> bool {
        match self {
            TargetColor::Multi => true,
            TargetColor::Red => robot == Robot::Red,
            TargetColor::Green => robot == Robot::Green,
            TargetColor::Blue => robot == Robot::Blue,
            TargetColor::Yellow => robot == Robot::Yellow,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            TargetColor::Red => "red",
            TargetColor::Green => "green",
            TargetColor::Blue => "blue",
            TargetColor::Yellow => "yellow",
            TargetColor::Multi => "multi",
        }
    }
}

/// A target printed on a tile, in the tile's canonical coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileTarget {
    pub x: u8,
    pub y: u8,
    pub color: TargetColor,
    pub symbol: String,
}

/// One side of a physical board piece, authored as the north-west quadrant.
/// `walls[y][x]` is the mask of column `x`, row `y`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub id: u16,
    pub name: String,
    /// Physical piece this side belongs to; empty means the tile stands alone.
    #[serde(default)]
    pub piece: String,
    pub walls: Vec<Vec<WallMask>>,
    #[serde(default)]
    pub targets: Vec<TileTarget>,
}

impl Tile {
    #[inline]
    pub fn size(&self) -> usize {
        self.walls.len()
    }

    #[inline]
    pub fn wall(&self, x: usize, y: usize) -> WallMask {
        self.walls[y][x]
    }

    /// Key shared by both sides of one piece.
    #[inline]
    pub fn piece(&self) -> &str {
        if self.piece.is_empty() {
            &self.name
        } else {
            &self.piece
        }
    }
}

#[derive(Debug, Default)]
pub struct TileCatalogue {
    by_id: HashMap<u16, Tile>,
    name_to_id: HashMap<String, u16>,
    tile_size: usize,
}

impl TileCatalogue {
    /// Builds a catalogue, validating shape and uniqueness.
    pub fn from_tiles(raw: Vec<Tile>) -> Result<TileCatalogue> {
        let Some(first) = raw.first() else {
            return Err(Error::InvalidTile {
                id: 0,
                reason: "catalogue has no tiles".to_string(),
            });
        };
        let tile_size = first.size();

        let mut by_id: HashMap<u16, Tile> = HashMap::with_capacity(raw.len());
        let mut name_to_id: HashMap<String, u16> = HashMap::with_capacity(raw.len());

        for t in raw {
            validate_tile(&t, tile_size)?;
            if let Some(prev) = name_to_id.insert(t.name.clone(), t.id) {
                return Err(Error::InvalidTile {
                    id: t.id,
                    reason: format!("duplicate name '{}' (also id {prev})", t.name),
                });
            }
            if by_id.contains_key(&t.id) {
                return Err(Error::InvalidTile {
                    id: t.id,
                    reason: "duplicate id".to_string(),
                });
            }
            by_id.insert(t.id, t);
        }

        Ok(TileCatalogue {
            by_id,
            name_to_id,
            tile_size,
        })
    }

    #[inline]
    pub fn get(&self, id: u16) -> Option<&Tile> {
        self.by_id.get(&id)
    }

    #[inline]
    pub fn id_by_name(&self, name: &str) -> Option<u16> {
        self.name_to_id.get(name).copied()
    }

    /// Side length shared by every tile in the catalogue.
    #[inline]
    pub fn tile_size(&self) -> usize {
        self.tile_size
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Tile ids in ascending order.
    pub fn ids(&self) -> Vec<u16> {
        let mut ids: Vec<u16> = self.by_id.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

fn validate_tile(tile: &Tile, tile_size: usize) -> Result<()> {
    let invalid = |reason: String| Error::InvalidTile { id: tile.id, reason };

    if tile.size() == 0 {
        return Err(invalid("tile has no rows".to_string()));
    }
    if tile.size() != tile_size {
        return Err(invalid(format!(
            "tile is {} rows, catalogue tiles are {tile_size}",
            tile.size()
        )));
    }
    if let Some((y, row)) = tile.walls.iter().enumerate().find(|(_, r)| r.len() != tile_size) {
        return Err(invalid(format!("row {y} has {} cells, expected {tile_size}", row.len())));
    }
    for t in &tile.targets {
        if usize::from(t.x) >= tile_size || usize::from(t.y) >= tile_size {
            return Err(invalid(format!(
                "target {}-{} at ({}, {}) is off the tile",
                t.color.name(),
                t.symbol,
                t.x,
                t.y
            )));
        }
    }
    Ok(())
}

/// Parse a catalogue from JSON text.
pub fn parse_tiles_json(data: &str) -> Result<TileCatalogue> {
    let raw: Vec<Tile> = serde_json::from_str(data)?;
    TileCatalogue::from_tiles(raw)
}

/// Load a catalogue from a JSON file (runtime).
pub fn load_tiles_from_json<P: AsRef<Path>>(path: P) -> Result<TileCatalogue> {
    let data = fs::read_to_string(path.as_ref())?;
    parse_tiles_json(&data)
}
