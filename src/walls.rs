use serde::{Deserialize, Serialize};

use crate::types::Direction;

/// Four wall bits in N, E, S, W order (bit 0 = North). Always within 0..=15.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct WallMask(u8);

impl WallMask {
    pub const NONE: WallMask = WallMask(0);
    pub const ALL: WallMask = WallMask(0xF);

    #[inline]
    pub const fn new(bits: u8) -> Option<WallMask> {
        if bits <= 0xF {
            Some(WallMask(bits))
        } else {
            None
        }
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn of(dir: Direction) -> WallMask {
        WallMask(1 << dir.index())
    }

    #[inline]
    pub const fn has(self, dir: Direction) -> bool {
        self.0 & (1 << dir.index()) != 0
    }

    #[inline]
    #[must_use]
    pub const fn with(self, dir: Direction) -> WallMask {
        WallMask(self.0 | (1 << dir.index()))
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: WallMask) -> WallMask {
        WallMask(self.0 | other.0)
    }

    /// Mask of the same cell after its tile turned `steps` quarter turns
    /// clockwise: the wall that faced North now faces East, and so on.
    #[inline]
    #[must_use]
    pub const fn rotate(self, steps: u8) -> WallMask {
        WallMask(rotate(self.0, steps))
    }
}

/// Circular left shift of the low nibble. `steps` is taken modulo 4.
#[inline]
pub const fn rotate(mask: u8, steps: u8) -> u8 {
    let s = steps % 4;
    let m = mask & 0xF;
    ((m << s) | (m >> (4 - s))) & 0xF
}

impl TryFrom<u8> for WallMask {
    type Error = String;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        WallMask::new(bits).ok_or_else(|| format!("wall mask {bits} out of range 0..=15"))
    }
}

impl From<WallMask> for u8 {
    #[inline]
    fn from(m: WallMask) -> u8 {
        m.0
    }
}

