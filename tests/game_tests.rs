use std::path::Path;

use ricochet::{
    load_tiles_from_json, rng_for_level, Command, Config, Coord, CoordSet, Direction, Error, Game,
    MoveState, Notification, Robot, RobotsCoords,
};

const SCHEMA: [u16; 4] = [1, 3, 5, 7];

fn new_game(seed: u64) -> Game {
    let cat = load_tiles_from_json(Path::new("data/tiles.json")).expect("failed to load tiles.json");
    Game::new(cat, Config::default(), rng_for_level(seed, 0))
}

fn coords() -> RobotsCoords {
    [
        (Robot::Red, Coord::new(1, 5)),
        (Robot::Green, Coord::new(0, 0)),
        (Robot::Grey, Coord::new(2, 2)),
        (Robot::Yellow, Coord::new(10, 7)),
        (Robot::Blue, Coord::new(12, 7)),
    ]
    .into_iter()
    .collect()
}

fn prepared_game() -> Game {
    let mut g = new_game(1);
    g.handle(Command::Prepare {
        robots_coords: coords(),
        schema: SCHEMA.to_vec(),
    })
    .expect("prepare");
    g.handle(Command::Enable).expect("enable");
    g
}

#[test]
fn ping_answers_ready() {
    let mut g = new_game(0);
    assert_eq!(g.handle(Command::Ping).unwrap(), vec![Notification::Ready]);
}

#[test]
fn generated_coords_cover_every_robot_off_targets() {
    let mut g = new_game(5);
    let notes = g
        .handle(Command::GenerateRobotsCoords {
            schema: Some(SCHEMA.to_vec()),
        })
        .unwrap();
    let [Notification::SubmitRobotsCoords { coords }] = notes.as_slice() else {
        panic!("expected one submit_robots_coords, got {notes:?}");
    };
    assert_eq!(coords.len(), Robot::ALL.len());
    let distinct: CoordSet = coords.values().copied().collect();
    assert_eq!(distinct.len(), Robot::ALL.len());

    // The generated coordinates prepare cleanly and miss every target.
    g.prepare(coords, &SCHEMA).expect("prepare");
    let targets = g.board().unwrap().target_cells();
    assert!(coords.values().all(|c| !targets.contains(c)));

    // Same seed, same draw.
    let again = new_game(5).generate_robots_coords(Some(&SCHEMA[..])).unwrap();
    assert_eq!(&again, coords);
}

#[test]
fn generation_without_any_board_fails() {
    let mut g = new_game(0);
    assert!(matches!(
        g.handle(Command::GenerateRobotsCoords { schema: None }),
        Err(Error::NotPrepared)
    ));
    assert!(matches!(
        g.generate_robots_coords(Some(&[1, 2][..])),
        Err(Error::TileOrderLength { .. })
    ));
}

#[test]
fn prepare_requires_every_robot() {
    let mut g = new_game(0);
    let mut partial = coords();
    partial.remove(&Robot::Grey);
    let res = g.prepare(&partial, &SCHEMA);
    assert!(matches!(res, Err(Error::UndefinedPiece(Robot::Grey))));
    assert!(g.board().is_none());
    assert!(matches!(g.position(Robot::Red), Err(Error::UndefinedPiece(Robot::Red))));

    let mut off = coords();
    off.insert(Robot::Grey, Coord::new(16, 0));
    match g.prepare(&off, &SCHEMA) {
        Err(Error::OffBoard { robot, cell }) => {
            assert_eq!(robot, Robot::Grey);
            assert_eq!(cell, Coord::new(16, 0));
        }
        other => panic!("expected OffBoard, got {other:?}"),
    }
}

#[test]
fn prepare_rejects_robots_sharing_a_cell() {
    let mut g = new_game(0);
    let mut stacked = coords();
    stacked.insert(Robot::Yellow, Coord::new(1, 5));
    match g.prepare(&stacked, &SCHEMA) {
        Err(Error::SharedCell { first, second, cell }) => {
            assert_eq!(first, Robot::Red);
            assert_eq!(second, Robot::Yellow);
            assert_eq!(cell, Coord::new(1, 5));
        }
        other => panic!("expected SharedCell, got {other:?}"),
    }
    assert!(g.board().is_none());
}

#[test]
fn prepare_rejects_a_piece_used_twice() {
    let mut g = new_game(0);
    assert!(matches!(
        g.prepare(&coords(), &[1, 2, 5, 7]),
        Err(Error::ReusedPiece { id: 2, .. })
    ));
    assert!(g.board().is_none());
}

#[test]
fn target_on_any_slot_can_be_achieved() {
    // red-circle comes from the red piece; in the SE slot it is turned twice.
    let mut g = new_game(0);
    g.prepare(&coords(), &[3, 5, 2, 7]).expect("prepare");
    g.handle(Command::Enable).unwrap();
    let cell = g.board().unwrap().target("red-circle").expect("red-circle").cell;
    assert_eq!(cell, Coord::new(10, 12));

    g.select_token("red-circle").unwrap();
    assert!(g.is_achieved(Robot::Red, cell));
    assert!(!g.is_achieved(Robot::Red, Coord::new(1, 2)));
}

#[test]
fn moves_are_ignored_while_disabled() {
    let mut g = new_game(0);
    g.prepare(&coords(), &SCHEMA).unwrap();
    assert_eq!(g.state(), MoveState::Disabled);

    g.handle(Command::SelectRobot { name: Robot::Red }).unwrap();
    assert_eq!(g.selected_robot(), None);
    let notes = g.handle(Command::MoveRobot { direction: Direction::North }).unwrap();
    assert!(notes.is_empty());

    g.handle(Command::Enable).unwrap();
    g.handle(Command::SelectRobot { name: Robot::Red }).unwrap();
    g.handle(Command::Disable).unwrap();
    let notes = g.handle(Command::MoveRobot { direction: Direction::North }).unwrap();
    assert!(notes.is_empty());
}

#[test]
fn move_without_selection_emits_nothing() {
    let mut g = prepared_game();
    assert!(g.move_selected(Direction::East).unwrap().is_empty());
}

#[test]
fn reaching_selected_target_is_announced() {
    let mut g = prepared_game();
    g.handle(Command::SelectToken { token: "red-circle".into() }).unwrap();
    g.handle(Command::SelectRobot { name: Robot::Red }).unwrap();

    let notes = g.handle(Command::MoveRobot { direction: Direction::North }).unwrap();
    assert_eq!(
        notes,
        vec![
            Notification::RobotMoved {
                robot: Robot::Red,
                from: Coord::new(1, 5),
                to: Coord::new(1, 2),
            },
            Notification::TokenAchieved,
        ]
    );

    // The store moves only when the move is echoed back.
    assert_eq!(g.position(Robot::Red).unwrap(), Coord::new(1, 5));
    g.handle(Command::RobotMoved { robot: Robot::Red, to: Coord::new(1, 2) }).unwrap();
    assert_eq!(g.position(Robot::Red).unwrap(), Coord::new(1, 2));
}

#[test]
fn wrong_target_or_wrong_color_is_not_achieved() {
    let mut g = prepared_game();
    g.select_token("green-triangle").unwrap();
    g.select_robot(Robot::Red);
    let notes = g.move_selected(Direction::North).unwrap();
    assert_eq!(notes.len(), 1);
    assert!(!notes.contains(&Notification::TokenAchieved));

    assert!(!g.is_achieved(Robot::Red, Coord::new(1, 2)));
    g.select_token("red-circle").unwrap();
    assert!(g.is_achieved(Robot::Red, Coord::new(1, 2)));
    assert!(!g.is_achieved(Robot::Blue, Coord::new(1, 2)));
}

#[test]
fn multi_target_accepts_any_robot() {
    let mut g = prepared_game();
    g.select_token("multi-vortex").unwrap();
    g.select_robot(Robot::Grey);
    let notes = g.move_selected(Direction::East).unwrap();
    assert_eq!(
        notes,
        vec![
            Notification::RobotMoved {
                robot: Robot::Grey,
                from: Coord::new(2, 2),
                to: Coord::new(4, 2),
            },
            Notification::TokenAchieved,
        ]
    );
}

#[test]
fn other_robots_block_and_blocked_moves_are_silent() {
    let mut g = prepared_game();
    g.select_robot(Robot::Blue);
    let notes = g.move_selected(Direction::West).unwrap();
    assert_eq!(
        notes,
        vec![Notification::RobotMoved {
            robot: Robot::Blue,
            from: Coord::new(12, 7),
            to: Coord::new(11, 7),
        }]
    );

    g.select_robot(Robot::Green);
    assert!(g.move_selected(Direction::North).unwrap().is_empty());
    assert!(g.move_selected(Direction::West).unwrap().is_empty());
}

#[test]
fn unknown_token_and_unprepared_moves_are_errors() {
    let mut g = new_game(0);
    assert!(matches!(g.select_token("red-circle"), Err(Error::NotPrepared)));
    assert!(matches!(
        g.apply_move(Robot::Red, Coord::new(0, 0)),
        Err(Error::NotPrepared)
    ));

    let mut g = prepared_game();
    assert!(matches!(g.select_token("purple-moon"), Err(Error::UnknownTarget(_))));
    assert!(matches!(
        g.apply_move(Robot::Red, Coord::new(-1, 0)),
        Err(Error::OffBoard { robot: Robot::Red, .. })
    ));
    assert!(matches!(
        g.apply_move(Robot::Red, Coord::new(12, 7)),
        Err(Error::SharedCell { first: Robot::Blue, second: Robot::Red, .. })
    ));
    assert_eq!(g.position(Robot::Red).unwrap(), Coord::new(1, 5));
}

#[test]
fn pointer_picks_robot_under_it() {
    let g = prepared_game();
    let geometry = g.geometry().expect("geometry");
    let p = geometry.to_spatial(Coord::new(1, 5));
    assert_eq!(g.robot_at_point(p), Some(Robot::Red));
    assert_eq!(g.robot_at_point(geometry.to_spatial(Coord::new(5, 5))), None);
    assert_eq!(g.robot_at_point((10.0, 10.0)), None);
}

#[test]
fn unusable_cell_size_disables_pointer_picking() {
    let cat = load_tiles_from_json(Path::new("data/tiles.json")).expect("failed to load tiles.json");
    let config = Config { cell_size: 0.0, ..Config::default() };
    let mut g = Game::new(cat, config, rng_for_level(0, 0));
    assert!(matches!(g.geometry(), Err(Error::NotPrepared)));

    g.prepare(&coords(), &SCHEMA).unwrap();
    assert!(matches!(g.geometry(), Err(Error::InvalidConfig(_))));
    assert_eq!(g.robot_at_point((0.0, 0.0)), None);
}

#[test]
fn commands_and_notifications_use_the_event_tag() {
    let json = r#"{"event":"prepare","robotsCoords":{"red":[1,5],"green":[0,0],"grey":[2,2],"yellow":[10,7],"blue":[12,7]},"schema":[1,3,5,7]}"#;
    let cmd: Command = serde_json::from_str(json).expect("parse prepare");
    assert_eq!(
        cmd,
        Command::Prepare {
            robots_coords: coords(),
            schema: SCHEMA.to_vec(),
        }
    );

    let cmd: Command = serde_json::from_str(r#"{"event":"move_robot","direction":"north"}"#).unwrap();
    assert_eq!(cmd, Command::MoveRobot { direction: Direction::North });
    let cmd: Command = serde_json::from_str(r#"{"event":"generate_robots_coords"}"#).unwrap();
    assert_eq!(cmd, Command::GenerateRobotsCoords { schema: None });

    let note = Notification::RobotMoved {
        robot: Robot::Red,
        from: Coord::new(1, 5),
        to: Coord::new(1, 2),
    };
    assert_eq!(
        serde_json::to_string(&note).unwrap(),
        r#"{"event":"robot_moved","robot":"red","from":[1,5],"to":[1,2]}"#
    );
    assert_eq!(serde_json::to_string(&Notification::Ready).unwrap(), r#"{"event":"ready"}"#);
}
