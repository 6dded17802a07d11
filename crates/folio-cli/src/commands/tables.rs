//! Table commands: prices, returns, weights, cumulative returns and families.

use anyhow::Result;
use clap::Args;

use crate::cli::{GlobalArgs, OutputFormat};
use crate::commands::load_pipeline;
use crate::output::{print_header, print_tidy, print_wide};

/// Arguments for the prices, returns and weights commands.
#[derive(Args, Debug)]
pub struct TableArgs {
    /// Long form: one row per date and asset
    #[arg(long)]
    pub tidy: bool,
}

/// Execute the prices command.
pub fn prices(args: &TableArgs, global: &GlobalArgs) -> Result<()> {
    let pipeline = load_pipeline(global)?;
    title(global, "Prices");
    if args.tidy {
        print_tidy(&pipeline.tidy_prices(), global.format, global.precision)
    } else {
        print_wide(pipeline.prices(), global.format, global.precision)
    }
}

/// Execute the returns command.
pub fn returns(args: &TableArgs, global: &GlobalArgs) -> Result<()> {
    let pipeline = load_pipeline(global)?;
    title(global, "Daily Returns (%)");
    if args.tidy {
        print_tidy(&pipeline.tidy_returns(), global.format, global.precision)
    } else {
        print_wide(pipeline.returns(), global.format, global.precision)
    }
}

/// Execute the weights command.
pub fn weights(args: &TableArgs, global: &GlobalArgs) -> Result<()> {
    let pipeline = load_pipeline(global)?;
    title(global, "Portfolio Weights");
    if args.tidy {
        print_tidy(&pipeline.tidy_weights(), global.format, global.precision)
    } else {
        print_wide(pipeline.weights(), global.format, global.precision)
    }
}

/// Execute the cumulative command.
pub fn cumulative(global: &GlobalArgs) -> Result<()> {
    let pipeline = load_pipeline(global)?;
    title(global, "Cumulative Returns");
    print_wide(&pipeline.cumulative_returns(), global.format, global.precision)
}

/// Execute the families command.
pub fn families(global: &GlobalArgs) -> Result<()> {
    let pipeline = load_pipeline(global)?;
    let by_family = pipeline.family_weights()?;
    title(global, "Portfolio Weights by Asset Family");
    print_wide(&by_family, global.format, global.precision)
}

/// Prints a section title in table mode only.
pub(crate) fn title(global: &GlobalArgs, text: &str) {
    if global.format == OutputFormat::Table {
        print_header(text);
    }
}
