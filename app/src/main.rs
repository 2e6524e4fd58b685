use std::{fs, path::PathBuf, str::FromStr, time::Duration};

use anyhow::Context;
use clap::Parser;
use life_matrix::{Grid, Selector, create_grid};
use log::info;

use crate::{
    app::App,
    simulation::{Simulation, SimulationConfig},
};

mod app;
mod render;
mod simulation;

#[derive(Parser)]
#[clap(author, version, about)]
struct Args {
    /// number of columns
    #[clap(long, default_value_t = 10)]
    width: usize,

    /// number of rows
    #[clap(long, default_value_t = 10)]
    height: usize,

    /// generations advanced each time the simulation is started
    #[clap(long, default_value_t = 100)]
    generations: usize,

    /// delay between two generations
    #[clap(long, default_value_t = 100)]
    interval_ms: u64,

    /// side of one cell in points
    #[clap(long, default_value_t = 50.)]
    cell_size: f32,

    /// pattern file (`o` alive, `.` dead) placed at the top-left corner
    #[clap(long)]
    pattern: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut grid = create_grid(args.width, args.height, true)?;
    if let Some(path) = &args.pattern {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let pattern = Grid::from_str(&text)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        grid.place(&pattern, Selector::new(0, 0));
    }
    info!(
        "{}x{} grid, population {}",
        grid.width(),
        grid.height(),
        grid.population()
    );

    let settings = render::Settings {
        cell_size: args.cell_size,
        ..Default::default()
    };
    let simulation = Simulation::new(SimulationConfig {
        generation_cap: args.generations,
        interval: Duration::from_millis(args.interval_ms),
    });

    let size = render::grid_size(&grid, settings) + egui::vec2(32., 64.);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(size),
        ..Default::default()
    };
    eframe::run_native(
        "Game of Life",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, grid, simulation, settings)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
