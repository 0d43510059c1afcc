use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::{Coord, Direction, Robot};

/// Robot name to grid coordinate. Commands may carry a partial map.
pub type RobotsCoords = BTreeMap<Robot, Coord>;

/// Commands the orchestrator accepts, one at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Command {
    Ping,
    /// Draw fresh robot positions. With `schema`, targets of that tile order
    /// are avoided; otherwise the current board's targets are.
    GenerateRobotsCoords {
        #[serde(default)]
        schema: Option<Vec<u16>>,
    },
    Prepare {
        #[serde(alias = "robotsCoords")]
        robots_coords: RobotsCoords,
        schema: Vec<u16>,
    },
    Enable,
    Disable,
    SelectToken {
        token: String,
    },
    SelectRobot {
        name: Robot,
    },
    MoveRobot {
        direction: Direction,
    },
    RobotMoved {
        robot: Robot,
        to: Coord,
    },
}

/// Notifications the orchestrator emits in response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Notification {
    Ready,
    SubmitRobotsCoords { coords: RobotsCoords },
    RobotMoved { robot: Robot, from: Coord, to: Coord },
    TokenAchieved,
}
