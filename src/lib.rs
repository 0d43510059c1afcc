#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
// Grid code moves between `i32` coordinates, `usize` indices and `f64` space.
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
#![allow(clippy::missing_errors_doc, clippy::must_use_candidate, clippy::return_self_not_must_use)]

pub mod types;
pub mod walls;
pub mod tiles;
pub mod board;
pub mod coords;
pub mod config;
pub mod error;
pub mod rng;
pub mod protocol;
pub mod game;

pub mod engine {
    pub mod slide;
    pub mod place;
}

// Re-exports: stable minimal API surface for external callers
pub use crate::board::{assemble, Board, Target, SLOTS};
pub use crate::config::Config;
pub use crate::coords::Geometry;
pub use crate::engine::place::place_all;
pub use crate::engine::slide::slide;
pub use crate::error::{Error, Result};
pub use crate::game::{Game, MoveState};
pub use crate::protocol::{Command, Notification, RobotsCoords};
pub use crate::rng::rng_for_level;
pub use crate::tiles::{load_tiles_from_json, parse_tiles_json, TargetColor, Tile, TileCatalogue};
pub use crate::types::{Coord, CoordSet, Direction, Robot};
pub use crate::walls::WallMask;
