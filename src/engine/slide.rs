use crate::board::Board;
use crate::types::{Coord, CoordSet, Direction};

/// Farthest cell reachable from `from` sliding in `dir`.
///
/// Travel stops before a wall on the departure side of the current cell, before
/// leaving the board, or before a cell in `occupied`. The mover's own cell may
/// be in `occupied`; only cells ahead are tested. A blocked first step returns
/// `from` unchanged, which is a valid no-op, not an error.
pub fn slide(board: &Board, from: Coord, dir: Direction, occupied: &CoordSet) -> Coord {
    let mut cur = from;
    loop {
        let Some(walls) = board.get(cur) else {
            return cur;
        };
        if walls.has(dir) {
            return cur;
        }
        let next = cur.step(dir);
        if !board.contains(next) || occupied.contains(&next) {
            return cur;
        }
        cur = next;
    }
}

/// Cells a piece passes through, `from` excluded, ending at the slide result.
pub fn slide_path(board: &Board, from: Coord, dir: Direction, occupied: &CoordSet) -> Vec<Coord> {
    let to = slide(board, from, dir, occupied);
    let mut path = Vec::new();
    let mut cur = from;
    while cur != to {
        cur = cur.step(dir);
        path.push(cur);
    }
    path
}

/// Result of sliding in each direction, in N, E, S, W order.
pub fn reachable(board: &Board, from: Coord, occupied: &CoordSet) -> [Coord; 4] {
    Direction::ALL.map(|d| slide(board, from, d, occupied))
}
