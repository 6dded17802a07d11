//! Scatter command implementation.

use anyhow::Result;
use clap::Args;

use crate::cli::GlobalArgs;
use crate::commands::load_pipeline;
use crate::commands::tables::title;
use crate::output::{print_grid, Grid};

/// Arguments for the scatter command.
#[derive(Args, Debug)]
pub struct ScatterArgs {
    /// Asset on the x axis
    pub x: String,

    /// Asset on the y axis
    pub y: String,
}

/// Execute the scatter command.
pub fn execute(args: &ScatterArgs, global: &GlobalArgs) -> Result<()> {
    let pipeline = load_pipeline(global)?;
    let scatter = pipeline.scatter(&args.x, &args.y)?;

    let mut grid = Grid::new("Date", vec![scatter.x_asset.clone(), scatter.y_asset.clone()]);
    for p in &scatter.points {
        grid.push(p.date.to_string(), vec![p.x, p.y]);
    }

    title(
        global,
        &format!("{} vs {} Daily Returns (%)", scatter.x_asset, scatter.y_asset),
    );
    print_grid(&grid, global.format, global.precision)
}
