use rand_pcg::Pcg64;

use crate::board::Board;
use crate::config::Config;
use crate::coords::Geometry;
use crate::engine::place::place_all;
use crate::engine::slide::slide;
use crate::error::{Error, Result};
use crate::protocol::{Command, Notification, RobotsCoords};
use crate::tiles::TileCatalogue;
use crate::types::{Coord, CoordSet, Direction, Robot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveState {
    Enabled,
    Disabled,
}

/// Canonical board and robot-position store.
///
/// Every handler takes `&mut self` and runs to completion, so commands are
/// applied strictly one after another.
#[derive(Debug)]
pub struct Game {
    catalogue: TileCatalogue,
    config: Config,
    rng: Pcg64,
    board: Option<Board>,
    positions: RobotsCoords,
    selected_robot: Option<Robot>,
    selected_token: Option<String>,
    state: MoveState,
}

impl Game {
    pub fn new(catalogue: TileCatalogue, config: Config, rng: Pcg64) -> Self {
        Self {
            catalogue,
            config,
            rng,
            board: None,
            positions: RobotsCoords::new(),
            selected_robot: None,
            selected_token: None,
            state: MoveState::Disabled,
        }
    }

    /// Dispatch one command.
    pub fn handle(&mut self, cmd: Command) -> Result<Vec<Notification>> {
        match cmd {
            Command::Ping => Ok(vec![Notification::Ready]),
            Command::GenerateRobotsCoords { schema } => {
                let coords = self.generate_robots_coords(schema.as_deref())?;
                Ok(vec![Notification::SubmitRobotsCoords { coords }])
            }
            Command::Prepare {
                robots_coords,
                schema,
            } => {
                self.prepare(&robots_coords, &schema)?;
                Ok(Vec::new())
            }
            Command::Enable => {
                self.state = MoveState::Enabled;
                Ok(Vec::new())
            }
            Command::Disable => {
                self.state = MoveState::Disabled;
                Ok(Vec::new())
            }
            Command::SelectToken { token } => {
                self.select_token(&token)?;
                Ok(Vec::new())
            }
            Command::SelectRobot { name } => {
                self.select_robot(name);
                Ok(Vec::new())
            }
            Command::MoveRobot { direction } => self.move_selected(direction),
            Command::RobotMoved { robot, to } => {
                self.apply_move(robot, to)?;
                Ok(Vec::new())
            }
        }
    }

    /// Random starting cells for every robot, in `Robot::ALL` order, avoiding
    /// target cells.
    pub fn generate_robots_coords(&mut self, schema: Option<&[u16]>) -> Result<RobotsCoords> {
        let fresh;
        let board = match schema {
            Some(order) => {
                fresh = Board::assemble(&self.catalogue, order)?;
                &fresh
            }
            None => self.board.as_ref().ok_or(Error::NotPrepared)?,
        };
        let forbidden = board.target_cells();
        let cells = place_all(
            board,
            Robot::ALL.len(),
            &forbidden,
            self.config.placement_attempts,
            &mut self.rng,
        )?;
        Ok(Robot::ALL.into_iter().zip(cells).collect())
    }

    /// Build the board for `schema` and put every robot on its cell.
    /// Fails without touching the current level if any robot lacks a
    /// coordinate, sits off the new board or shares a cell.
    pub fn prepare(&mut self, coords: &RobotsCoords, schema: &[u16]) -> Result<()> {
        let board = Board::assemble(&self.catalogue, schema)?;

        let mut positions = RobotsCoords::new();
        for robot in Robot::ALL {
            let cell = *coords.get(&robot).ok_or(Error::UndefinedPiece(robot))?;
            if !board.contains(cell) {
                return Err(Error::OffBoard { robot, cell });
            }
            if let Some((&first, _)) = positions.iter().find(|(_, c)| **c == cell) {
                return Err(Error::SharedCell {
                    first,
                    second: robot,
                    cell,
                });
            }
            positions.insert(robot, cell);
        }

        self.board = Some(board);
        self.positions = positions;
        self.selected_robot = None;
        self.selected_token = None;
        Ok(())
    }

    pub fn select_token(&mut self, name: &str) -> Result<()> {
        let board = self.board.as_ref().ok_or(Error::NotPrepared)?;
        if board.target(name).is_none() {
            return Err(Error::UnknownTarget(name.to_string()));
        }
        self.selected_token = Some(name.to_string());
        Ok(())
    }

    /// Ignored while moves are disabled.
    pub fn select_robot(&mut self, robot: Robot) {
        if self.state == MoveState::Disabled {
            return;
        }
        self.selected_robot = Some(robot);
    }

    /// Slide the selected robot. Nothing is emitted while disabled, with no
    /// selection, or when the robot cannot move. The store itself is updated
    /// only by the `robot_moved` echo.
    pub fn move_selected(&mut self, dir: Direction) -> Result<Vec<Notification>> {
        if self.state == MoveState::Disabled {
            return Ok(Vec::new());
        }
        let Some(robot) = self.selected_robot else {
            return Ok(Vec::new());
        };
        let board = self.board.as_ref().ok_or(Error::NotPrepared)?;
        let from = self.position(robot)?;

        let occupied: CoordSet = self.positions.values().copied().collect();
        let to = slide(board, from, dir, &occupied);
        if to == from {
            return Ok(Vec::new());
        }

        let mut out = vec![Notification::RobotMoved { robot, from, to }];
        if self.is_achieved(robot, to) {
            out.push(Notification::TokenAchieved);
        }
        Ok(out)
    }

    /// Record a robot's new cell.
    pub fn apply_move(&mut self, robot: Robot, to: Coord) -> Result<()> {
        let board = self.board.as_ref().ok_or(Error::NotPrepared)?;
        if !board.contains(to) {
            return Err(Error::OffBoard { robot, cell: to });
        }
        if let Some((&other, _)) = self.positions.iter().find(|(r, c)| **r != robot && **c == to) {
            return Err(Error::SharedCell {
                first: other,
                second: robot,
                cell: to,
            });
        }
        let slot = self.positions.get_mut(&robot).ok_or(Error::UndefinedPiece(robot))?;
        *slot = to;
        Ok(())
    }

    /// Whether `robot` standing on `cell` completes the selected target.
    pub fn is_achieved(&self, robot: Robot, cell: Coord) -> bool {
        let (Some(board), Some(name)) = (self.board.as_ref(), self.selected_token.as_deref()) else {
            return false;
        };
        board
            .target(name)
            .is_some_and(|t| t.cell == cell && t.color.accepts(robot))
    }

    pub fn position(&self, robot: Robot) -> Result<Coord> {
        self.positions.get(&robot).copied().ok_or(Error::UndefinedPiece(robot))
    }

    /// Robot standing on the cell under a spatial point, for pointer picking.
    pub fn robot_at_point(&self, p: (f64, f64)) -> Option<Robot> {
        let cell = self.geometry().ok()?.cell_at(p)?;
        self.positions
            .iter()
            .find_map(|(r, c)| (*c == cell).then_some(*r))
    }

    pub fn geometry(&self) -> Result<Geometry> {
        let board = self.board.as_ref().ok_or(Error::NotPrepared)?;
        Geometry::new(board.size(), self.config.cell_size)
    }

    #[inline]
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    #[inline]
    pub fn positions(&self) -> &RobotsCoords {
        &self.positions
    }

    #[inline]
    pub fn selected_robot(&self) -> Option<Robot> {
        self.selected_robot
    }

    #[inline]
    pub fn selected_token(&self) -> Option<&str> {
        self.selected_token.as_deref()
    }

    #[inline]
    pub fn state(&self) -> MoveState {
        self.state
    }

    #[inline]
    pub fn catalogue(&self) -> &TileCatalogue {
        &self.catalogue
    }
}
