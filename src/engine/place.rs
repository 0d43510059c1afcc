use rand::Rng;

use crate::board::Board;
use crate::error::{Error, Result};
use crate::types::{Coord, CoordSet};

/// Draw `count` distinct cells, none in `forbidden`, uniformly at random.
///
/// Each piece gets at most `attempts_per_piece` draws. Walls are ignored; a
/// piece may start anywhere that is free. Output order is the order pieces
/// were requested in.
pub fn place_all<R: Rng>(
    board: &Board,
    count: usize,
    forbidden: &CoordSet,
    attempts_per_piece: u32,
    rng: &mut R,
) -> Result<Vec<Coord>> {
    let n = board.size();
    let free = n * n - forbidden.iter().filter(|c| board.contains(**c)).count();
    if count > free {
        return Err(Error::Exhausted {
            requested: count,
            placed: 0,
        });
    }

    let mut taken: CoordSet = forbidden.clone();
    let mut placed: Vec<Coord> = Vec::with_capacity(count);
    let side = n as i32;

    for _ in 0..count {
        let mut found = None;
        for _ in 0..attempts_per_piece {
            let c = Coord::new(rng.gen_range(0..side), rng.gen_range(0..side));
            if !taken.contains(&c) {
                found = Some(c);
                break;
            }
        }
        let Some(c) = found else {
            return Err(Error::Exhausted {
                requested: count,
                placed: placed.len(),
            });
        };
        taken.insert(c);
        placed.push(c);
    }

    Ok(placed)
}
