use crate::error::{Error, Result};
use crate::types::Coord;

/// Affine map between grid cells and the continuous plane the renderer uses.
///
/// The board is centered on the origin; a grid coordinate maps to the center
/// of its cell, so `to_grid(to_spatial(g)) == g` holds exactly for every cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    board_size: usize,
    cell_size: f64,
}

impl Geometry {
    /// `cell_size` must be finite and positive, otherwise cells collapse onto
    /// each other and `to_grid` stops inverting `to_spatial`.
    pub fn new(board_size: usize, cell_size: f64) -> Result<Self> {
        check_cell_size(cell_size)?;
        Ok(Self { board_size, cell_size })
    }

    #[inline]
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    #[inline]
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Distance from the origin to any board edge.
    #[inline]
    pub fn half_extent(&self) -> f64 {
        self.board_size as f64 * self.cell_size / 2.0
    }

    /// Center of a grid cell in spatial coordinates.
    #[inline]
    pub fn to_spatial(&self, c: Coord) -> (f64, f64) {
        let h = self.half_extent();
        (
            (f64::from(c.x) + 0.5) * self.cell_size - h,
            (f64::from(c.y) + 0.5) * self.cell_size - h,
        )
    }

    /// Grid cell containing a spatial point. Points off the board map to
    /// coordinates outside `0..board_size`; see [`Geometry::cell_at`].
    #[inline]
    pub fn to_grid(&self, (sx, sy): (f64, f64)) -> Coord {
        let h = self.half_extent();
        Coord::new(
            ((sx + h) / self.cell_size).floor() as i32,
            ((sy + h) / self.cell_size).floor() as i32,
        )
    }

    /// Like [`Geometry::to_grid`] but `None` for points off the board.
    #[inline]
    pub fn cell_at(&self, p: (f64, f64)) -> Option<Coord> {
        let c = self.to_grid(p);
        c.in_bounds(self.board_size).then_some(c)
    }
}

pub(crate) fn check_cell_size(cell_size: f64) -> Result<()> {
    if cell_size.is_finite() && cell_size > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidConfig(format!(
            "cell_size must be a positive finite number, got {cell_size}"
        )))
    }
}
