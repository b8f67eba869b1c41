//! Terminal path reveal demo.
//!
//! Run: cargo run --bin walk -- --seed 7 --tick-ms 50

use std::thread;
use std::time::Duration;

use clap::Parser;
use gridwalk_demos::{Args, render};
use gridwalk_grid::Grid;
use gridwalk_paths::{PathFinder, Playback};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("grid seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);
    let grid = Grid::with_config(&args.grid_config(), &mut rng)?;

    let mut finder = PathFinder::with_config(args.search_config());
    let path = finder.search_default(&grid)?;
    if path.is_empty() {
        println!("{}\n\nno path (seed {seed})", render(&grid, &[]));
        return Ok(());
    }
    if let Some(stats) = finder.last_search() {
        info!(
            "path of {} steps, {} cells expanded",
            path.len(),
            stats.expanded
        );
    }

    let tick = Duration::from_millis(args.tick_ms);
    let mut playback = Playback::new(path);
    let mut step = 0;
    while playback.next().is_some() {
        step += 1;
        println!("{}\n", render(&grid, playback.shown()));
        if args.steps.is_some_and(|n| step >= n) {
            playback.stop();
            info!("stopped after {step} steps, {} left", playback.remaining());
            break;
        }
        thread::sleep(tick);
    }
    Ok(())
}
