use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Cardinal direction. The discriminant doubles as the wall bit index and
/// the clockwise rotation step from North.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    #[inline]
    pub const fn index(self) -> u8 {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    #[inline]
    pub const fn from_index(i: u8) -> Direction {
        match i % 4 {
            0 => Direction::North,
            1 => Direction::East,
            2 => Direction::South,
            _ => Direction::West,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Direction {
        Direction::from_index(self.index() + 2)
    }

    /// Unit step in grid space; y grows southward.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        })
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" | "n" | "up" => Ok(Direction::North),
            "east" | "e" | "right" => Ok(Direction::East),
            "south" | "s" | "down" => Ok(Direction::South),
            "west" | "w" | "left" => Ok(Direction::West),
            other => Err(format!("unknown direction '{other}'")),
        }
    }
}

/// Grid coordinate. Serialized as a two-element `[x, y]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn step(self, dir: Direction) -> Coord {
        let (dx, dy) = dir.delta();
        Coord::new(self.x + dx, self.y + dy)
    }

    #[inline]
    pub const fn in_bounds(self, size: usize) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as usize) < size && (self.y as usize) < size
    }
}

impl From<[i32; 2]> for Coord {
    #[inline]
    fn from([x, y]: [i32; 2]) -> Self {
        Coord::new(x, y)
    }
}

impl From<Coord> for [i32; 2] {
    #[inline]
    fn from(c: Coord) -> Self {
        [c.x, c.y]
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Coord {
    type Err = String;

    /// Parses `x,y`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| format!("invalid coordinate '{s}', expected x,y"))?;
        let x = x.trim().parse::<i32>().map_err(|e| format!("invalid x in '{s}': {e}"))?;
        let y = y.trim().parse::<i32>().map_err(|e| format!("invalid y in '{s}': {e}"))?;
        Ok(Coord::new(x, y))
    }
}

/// Set of occupied or forbidden cells.
pub type CoordSet = hashbrown::HashSet<Coord>;

/// Piece identity. Only the orchestrator cares about it; the movement and
/// placement engines work on bare coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Robot {
    Blue,
    Green,
    Yellow,
    Red,
    Grey,
}

impl Robot {
    pub const ALL: [Robot; 5] = [
        Robot::Blue,
        Robot::Green,
        Robot::Yellow,
        Robot::Red,
        Robot::Grey,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Robot::Blue => "blue",
            Robot::Green => "green",
            Robot::Yellow => "yellow",
            Robot::Red => "red",
            Robot::Grey => "grey",
        }
    }
}

impl fmt::Display for Robot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
