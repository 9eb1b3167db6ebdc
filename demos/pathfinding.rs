//! Shortest paths between two pixels under 4-, 8- and m-connectivity.
//!
//! Run: cargo run --bin pathfinding -- --start 1,1 --end 4,4
//!      cargo run --bin pathfinding -- --random 12x12 --seed 7 --mode m

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pixconn_core::{Coord, Raster};
use pixconn_demos::{parse_one_based, parse_size, random_raster, reference_raster};
use pixconn_paths::{ConnectivityMode, find_shortest_path};

#[derive(Debug, Parser)]
#[command(name = "pathfinding", about = "Shortest pixel paths under 4-, 8- and m-connectivity")]
struct Args {
    /// Text raster file: one row per line, `0`/`1` per cell.
    #[arg(long, conflicts_with = "random")]
    raster: Option<PathBuf>,

    /// Generate a random ROWSxCOLS raster instead of the reference one.
    #[arg(long, value_parser = parse_size)]
    random: Option<(usize, usize)>,

    /// Seed for --random.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Foreground probability for --random.
    #[arg(long, default_value_t = 0.6)]
    density: f64,

    /// Start cell as 1-based ROW,COL (default: top-left).
    #[arg(long, value_parser = parse_one_based)]
    start: Option<Coord>,

    /// End cell as 1-based ROW,COL (default: bottom-right).
    #[arg(long, value_parser = parse_one_based)]
    end: Option<Coord>,

    /// Connectivity to search with: 4, 8 or m. Repeatable; all three by default.
    #[arg(long = "mode", short = 'm')]
    modes: Vec<ConnectivityMode>,
}

fn load_raster(args: &Args) -> Result<Raster> {
    if let Some(path) = &args.raster {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        return Raster::parse(&text).with_context(|| format!("parsing {}", path.display()));
    }
    if let Some((rows, cols)) = args.random {
        return random_raster(rows, cols, args.density, args.seed)
            .context("generating random raster");
    }
    reference_raster().context("parsing reference raster")
}

fn main() -> Result<()> {
    pixconn_demos::init_logging();
    let args = Args::parse();

    let raster = load_raster(&args)?;
    let start = args.start.unwrap_or(Coord::ZERO);
    let end = args
        .end
        .unwrap_or(Coord::new(raster.rows() as i32 - 1, raster.cols() as i32 - 1));
    let modes = if args.modes.is_empty() {
        ConnectivityMode::ALL.to_vec()
    } else {
        args.modes.clone()
    };
    log::info!("{} raster, {} foreground cells", raster.bounds(), raster.foreground_count());

    println!("{raster}\n");
    println!("Start: {:?}", start.to_one_based());
    println!("End:   {:?}\n", end.to_one_based());

    for mode in modes {
        let report = find_shortest_path(&raster, mode, start, end)
            .with_context(|| format!("{mode}-connectivity search"))?;
        println!("--- {mode}-Connectivity ---");
        println!("{report}\n");
    }
    Ok(())
}
