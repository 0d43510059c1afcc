use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use ricochet::{load_tiles_from_json, rng_for_level, Command, Config, Game, Notification};

#[derive(Debug, Parser)]
#[command(name = "session", about = "Drive a game from JSON command lines on stdin")]
struct Args {
    /// Config JSON path (fields left out keep their defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Tile catalogue JSON path (overrides the config)
    #[arg(long)]
    tiles: Option<PathBuf>,

    /// Seed for robot placement (deterministic)
    #[arg(long, default_value_t = 0x00C0FFEEu64)]
    seed: u64,

    /// Apply emitted robot_moved notifications immediately, standing in for
    /// the peer that normally echoes them back
    #[arg(long)]
    echo: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::from_json_file(path).map_err(|e| format!("Config load error: {e}"))?,
        None => Config::default(),
    };
    if let Some(tiles) = args.tiles {
        config.tiles = tiles;
    }
    let catalogue = load_tiles_from_json(&config.tiles)
        .map_err(|e| format!("Tiles load error ({}): {e}", config.tiles.display()))?;

    let mut game = Game::new(catalogue, config, rng_for_level(args.seed, 0));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for (lineno, line) in stdin.lock().lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let cmd: Command = match serde_json::from_str(&line) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("[session] line {}: invalid command: {e}", lineno + 1);
                continue;
            }
        };
        let notes = match game.handle(cmd) {
            Ok(n) => n,
            Err(e) => {
                eprintln!("[session] line {}: {e}", lineno + 1);
                continue;
            }
        };
        for note in notes {
            writeln!(out, "{}", serde_json::to_string(&note)?)?;
            if args.echo {
                if let Notification::RobotMoved { robot, to, .. } = note {
                    game.apply_move(robot, to)?;
                }
            }
        }
        out.flush()?;
    }

    Ok(())
}
