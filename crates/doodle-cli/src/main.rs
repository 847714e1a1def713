//! Interactive driver for the doodlebug world.
//!
//! Renders the grid, waits for input, and advances one tick per empty line.
//! `q` quits. The simulation itself never stops, extinct or not.

mod render;
mod telemetry;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use doodle_core::SimConfig;
use doodle_world::World;
use tracing::info;

fn main() -> Result<()> {
    telemetry::init();

    let config = match std::env::args().nth(1) {
        Some(path) => SimConfig::from_json_file(&path)
            .with_context(|| format!("loading configuration from {path}"))?,
        None => SimConfig::default(),
    };

    let mut world = World::new(config)?;
    world.populate()?;

    let census = world.census();
    info!(
        ants = census.ants,
        doodlebugs = census.doodlebugs,
        side = world.config().grid_side,
        seed = world.config().seed,
        "simulation seeded"
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{}", render::render(&world));
        let census = world.census();
        println!("ants: {}  doodlebugs: {}", census.ants, census.doodlebugs);
        print!("Press Enter to step, or q then Enter to quit: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        if line?.trim() == "q" {
            break;
        }

        world.advance();
    }

    Ok(())
}
