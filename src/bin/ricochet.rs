use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ricochet::{
    load_tiles_from_json, place_all, rng_for_level, slide, Board, Config, Coord, CoordSet,
    Direction, Geometry,
};

#[derive(Debug, Parser)]
#[command(name = "ricochet", about = "Board assembly, sliding and placement tool")]
struct Args {
    /// Config JSON path (fields left out keep their defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Tile catalogue JSON path (overrides the config)
    #[arg(long, global = true)]
    tiles: Option<PathBuf>,

    /// Tile ids, one per slot in NW, NE, SE, SW order
    #[arg(long, global = true, default_value = "1,3,5,7")]
    order: String,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// Print the assembled board as ASCII
    Board,

    /// Draw random, distinct starting cells that avoid every target
    Place {
        #[arg(long, default_value_t = 5)]
        count: usize,

        /// Base seed (deterministic)
        #[arg(long, default_value_t = 0x00C0FFEEu64)]
        seed: u64,

        /// Level number mixed into the seed
        #[arg(long, default_value_t = 0)]
        level: u64,
    },

    /// Slide a piece and print the cell where it stops
    Slide {
        /// Start cell as x,y
        #[arg(long)]
        from: Coord,

        /// north | east | south | west
        #[arg(long)]
        dir: Direction,

        /// Other pieces as x,y (repeatable)
        #[arg(long)]
        occupied: Vec<Coord>,
    },

    /// Print the spatial center of a cell
    Locate {
        #[arg(long)]
        cell: Coord,
    },
}

fn parse_order(s: &str) -> Result<Vec<u16>, String> {
    s.split(',')
        .map(|t| t.trim().parse::<u16>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("Invalid tile id in '{s}': {e}"))
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
    eprintln!(
        "[ricochet] Loaded {} tiles of size {}.",
        catalogue.len(),
        catalogue.tile_size()
    );

    let order = parse_order(&args.order)?;
    let board = Board::assemble(&catalogue, &order)?;

    match args.cmd {
        Cmd::Board => {
            print!("{board}");
        }
        Cmd::Place { count, seed, level } => {
            let mut rng = rng_for_level(seed, level);
            let forbidden = board.target_cells();
            let cells = place_all(&board, count, &forbidden, config.placement_attempts, &mut rng)?;
            for c in cells {
                println!("{c}");
            }
        }
        Cmd::Slide {
            from,
            dir,
            occupied,
        } => {
            if !board.contains(from) {
                return Err(format!("Start cell {from} is off the {0}x{0} board", board.size()).into());
            }
            let occupied: CoordSet = occupied.into_iter().collect();
            let to = slide(&board, from, dir, &occupied);
            if to == from {
                eprintln!("[ricochet] Blocked: no movement {dir} from {from}");
            }
            println!("{to}");
        }
        Cmd::Locate { cell } => {
            let geometry = Geometry::new(board.size(), config.cell_size)?;
            let (x, y) = geometry.to_spatial(cell);
            println!("{x} {y}");
        }
    }

    Ok(())
}
