use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::tiles::{TargetColor, Tile, TileCatalogue};
use crate::types::{Coord, CoordSet, Direction};
use crate::walls::WallMask;

/// Tiles along each side of the assembled board.
pub const TILES_PER_SIDE: usize = 2;

/// A fixed region of the board and the rotation any tile dropped there gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// Column and row of the region, in tile units.
    pub col: usize,
    pub row: usize,
    /// Clockwise quarter turns applied to the canonical (north-west) tile.
    pub rotation: u8,
}

/// Slot table, in tile-order position: NW, NE, SE, SW.
pub const SLOTS: [Slot; TILES_PER_SIDE * TILES_PER_SIDE] = [
    Slot { col: 0, row: 0, rotation: 0 },
    Slot { col: 1, row: 0, rotation: 1 },
    Slot { col: 1, row: 1, rotation: 2 },
    Slot { col: 0, row: 1, rotation: 3 },
];

/// A target placed on the assembled board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Target {
    pub cell: Coord,
    pub color: TargetColor,
    pub symbol: String,
}

impl Target {
    /// Lookup key, e.g. `red-circle`.
    pub fn name(&self) -> String {
        format!("{}-{}", self.color.name(), self.symbol)
    }
}

/// Square grid of wall masks, row-major (`y * size + x`).
///
/// Built whole and never patched afterwards: a new level builds a new board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<WallMask>,
    targets: Vec<Target>,
}

impl Board {
    /// Closed arena with no interior walls and no targets.
    pub fn open(size: usize) -> Board {
        let mut cells = vec![WallMask::NONE; size * size];
        close_boundary(&mut cells, size);
        Board {
            size,
            cells,
            targets: Vec::new(),
        }
    }

    /// Board from raw row-major masks. Wall symmetry is enforced by OR-ing
    /// both sides of every shared edge; an open boundary is rejected.
    pub fn from_walls(size: usize, cells: Vec<WallMask>) -> Result<Board> {
        if cells.len() != size * size {
            return Err(Error::InvalidBoard(format!(
                "{} masks for a {size}x{size} board",
                cells.len()
            )));
        }
        let mut board = Board {
            size,
            cells,
            targets: Vec::new(),
        };
        board.merge_shared_edges();
        board.check_boundary()?;
        Ok(board)
    }

    /// Assemble a board from one tile id per slot (see [`SLOTS`]).
    pub fn assemble(catalogue: &TileCatalogue, order: &[u16]) -> Result<Board> {
        if order.len() != SLOTS.len() {
            return Err(Error::TileOrderLength {
                expected: SLOTS.len(),
                got: order.len(),
            });
        }
        let tiles = order
            .iter()
            .map(|&id| catalogue.get(id).ok_or(Error::UnknownTile(id)))
            .collect::<Result<Vec<&Tile>>>()?;

        // Each physical piece has two sides; only one of them can be face up.
        for (i, tile) in tiles.iter().enumerate() {
            if tiles[..i].iter().any(|t| t.piece() == tile.piece()) {
                return Err(Error::ReusedPiece {
                    id: tile.id,
                    piece: tile.piece().to_string(),
                });
            }
        }

        let tile_size = catalogue.tile_size();
        let size = tile_size * TILES_PER_SIDE;
        let mut board = Board {
            size,
            cells: vec![WallMask::NONE; size * size],
            targets: Vec::new(),
        };

        for (slot, tile) in SLOTS.iter().zip(tiles) {
            board.place_tile(tile, *slot);
        }

        board.merge_shared_edges();
        board.check_boundary()?;
        Ok(board)
    }

    fn place_tile(&mut self, tile: &Tile, slot: Slot) {
        let s = tile.size();
        let (ox, oy) = (slot.col * s, slot.row * s);

        for y in 0..s {
            for x in 0..s {
                let (rx, ry) = rotate_cell(x, y, s, slot.rotation);
                let idx = (oy + ry) * self.size + (ox + rx);
                self.cells[idx] = tile.wall(x, y).rotate(slot.rotation);
            }
        }

        for t in &tile.targets {
            let (rx, ry) = rotate_cell(usize::from(t.x), usize::from(t.y), s, slot.rotation);
            self.targets.push(Target {
                cell: Coord::new((ox + rx) as i32, (oy + ry) as i32),
                color: t.color,
                symbol: t.symbol.clone(),
            });
        }
    }

    /// OR the facing bits of every horizontally and vertically adjacent pair.
    /// Covers the tile seams, and also heals one-sided walls inside a tile.
    fn merge_shared_edges(&mut self) {
        let n = self.size;
        for y in 0..n {
            for x in 0..n {
                let here = y * n + x;
                if x + 1 < n {
                    self.merge_pair(here, here + 1, Direction::East);
                }
                if y + 1 < n {
                    self.merge_pair(here, here + n, Direction::South);
                }
            }
        }
    }

    #[inline]
    fn merge_pair(&mut self, a: usize, b: usize, dir: Direction) {
        if self.cells[a].has(dir) || self.cells[b].has(dir.opposite()) {
            self.cells[a] = self.cells[a].with(dir);
            self.cells[b] = self.cells[b].with(dir.opposite());
        }
    }

    fn check_boundary(&self) -> Result<()> {
        let last = self.size as i32 - 1;
        for i in 0..self.size as i32 {
            let edges = [
                (Coord::new(i, 0), Direction::North),
                (Coord::new(last, i), Direction::East),
                (Coord::new(i, last), Direction::South),
                (Coord::new(0, i), Direction::West),
            ];
            for (cell, side) in edges {
                if !self.wall_at(cell).has(side) {
                    return Err(Error::OpenBoundary { cell, side });
                }
            }
        }
        Ok(())
    }

    /// Boundary closure plus wall symmetry across every shared edge.
    pub fn check_invariants(&self) -> Result<()> {
        self.check_boundary()?;
        for y in 0..self.size as i32 {
            for x in 0..self.size as i32 {
                let c = Coord::new(x, y);
                for dir in [Direction::East, Direction::South] {
                    let n = c.step(dir);
                    if !n.in_bounds(self.size) {
                        continue;
                    }
                    if self.wall_at(c).has(dir) != self.wall_at(n).has(dir.opposite()) {
                        return Err(Error::InvalidBoard(format!(
                            "asymmetric wall between {c} and {n}"
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.in_bounds(self.size)
    }

    /// Mask of a cell, `None` off the board.
    #[inline]
    pub fn get(&self, c: Coord) -> Option<WallMask> {
        if self.contains(c) {
            Some(self.cells[c.y as usize * self.size + c.x as usize])
        } else {
            None
        }
    }

    #[inline]
    fn wall_at(&self, c: Coord) -> WallMask {
        self.cells[c.y as usize * self.size + c.x as usize]
    }

    /// Off-board cells count as walled on every side.
    #[inline]
    pub fn has_wall(&self, c: Coord, dir: Direction) -> bool {
        match self.get(c) {
            Some(m) => m.has(dir),
            None => true,
        }
    }

    #[inline]
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Target with the given name (`color-symbol`). Names are unique on an
    /// assembled board because no piece appears twice.
    pub fn target(&self, name: &str) -> Option<&Target> {
        self.targets.iter().find(|t| t.name() == name)
    }

    pub fn target_at(&self, c: Coord) -> Option<&Target> {
        self.targets.iter().find(|t| t.cell == c)
    }

    pub fn target_cells(&self) -> CoordSet {
        self.targets.iter().map(|t| t.cell).collect()
    }

    /// ASCII map; `pieces` letters are drawn over targets.
    pub fn render(&self, pieces: &[(Coord, char)]) -> String {
        let n = self.size as i32;
        let mut out = String::new();
        for y in 0..n {
            for x in 0..n {
                out.push('+');
                out.push_str(if self.wall_at(Coord::new(x, y)).has(Direction::North) { "--" } else { "  " });
            }
            out.push_str("+\n");
            for x in 0..n {
                let c = Coord::new(x, y);
                let m = self.wall_at(c);
                out.push(if m.has(Direction::West) { '|' } else { ' ' });
                out.push_str(&self.cell_label(c, pieces));
            }
            let east = self.wall_at(Coord::new(n - 1, y)).has(Direction::East);
            out.push(if east { '|' } else { ' ' });
            out.push('\n');
        }
        for x in 0..n {
            out.push('+');
            out.push_str(if self.wall_at(Coord::new(x, n - 1)).has(Direction::South) { "--" } else { "  " });
        }
        out.push_str("+\n");
        out
    }

    fn cell_label(&self, c: Coord, pieces: &[(Coord, char)]) -> String {
        if let Some((_, ch)) = pieces.iter().find(|(p, _)| *p == c) {
            return format!("{ch} ");
        }
        match self.target_at(c) {
            Some(t) => {
                let color = t.color.name().chars().next().unwrap_or('?').to_ascii_uppercase();
                let symbol = t.symbol.chars().next().unwrap_or('?');
                format!("{color}{symbol}")
            }
            None => "  ".to_string(),
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&[]))
    }
}

/// Free-function form of [`Board::assemble`].
#[inline]
pub fn assemble(catalogue: &TileCatalogue, order: &[u16]) -> Result<Board> {
    Board::assemble(catalogue, order)
}

/// Position of tile cell `(x, y)` after `steps` clockwise quarter turns.
#[inline]
pub fn rotate_cell(x: usize, y: usize, size: usize, steps: u8) -> (usize, usize) {
    let (mut x, mut y) = (x, y);
    for _ in 0..steps % 4 {
        (x, y) = (size - 1 - y, x);
    }
    (x, y)
}

fn close_boundary(cells: &mut [WallMask], size: usize) {
    if size == 0 {
        return;
    }
    for i in 0..size {
        cells[i] = cells[i].with(Direction::North);
        cells[(size - 1) * size + i] = cells[(size - 1) * size + i].with(Direction::South);
        cells[i * size] = cells[i * size].with(Direction::West);
        cells[i * size + size - 1] = cells[i * size + size - 1].with(Direction::East);
    }
}
