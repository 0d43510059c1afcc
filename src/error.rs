use thiserror::Error;

use crate::types::{Coord, Direction, Robot};

/// Failures surfaced by the board model, the engines and the orchestrator.
///
/// Everything except `Io`/`Json` points at malformed configuration or a
/// caller contract violation; nothing here is retried internally.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown tile id {0}")]
    UnknownTile(u16),

    #[error("tile order has {got} entries, board has {expected} slots")]
    TileOrderLength { expected: usize, got: usize },

    #[error("invalid tile {id}: {reason}")]
    InvalidTile { id: u16, reason: String },

    #[error("tile {id} reuses piece '{piece}' already placed on the board")]
    ReusedPiece { id: u16, piece: String },

    #[error("invalid board: {0}")]
    InvalidBoard(String),

    #[error("boundary cell {cell} is open to the {side}")]
    OpenBoundary { cell: Coord, side: Direction },

    #[error("could not place {requested} pieces ({placed} placed before giving up)")]
    Exhausted { requested: usize, placed: usize },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("robot '{robot}' at {cell} is off the board")]
    OffBoard { robot: Robot, cell: Coord },

    #[error("robots '{first}' and '{second}' share cell {cell}")]
    SharedCell { first: Robot, second: Robot, cell: Coord },

    #[error("undefined coordinates for robot '{0}'")]
    UndefinedPiece(Robot),

    #[error("unknown target '{0}'")]
    UnknownTarget(String),

    #[error("board has not been prepared")]
    NotPrepared,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
