//! Correlation command implementation.

use anyhow::Result;
use clap::{Args, ValueEnum};
use folio_analytics::CorrelationMatrix;

use crate::cli::GlobalArgs;
use crate::commands::tables::title;
use crate::commands::{load_pipeline, validate_precision};
use crate::output::{print_grid, Grid};

/// Which table to correlate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CorrelationSource {
    /// Daily returns
    #[default]
    Returns,
    /// Price levels
    Prices,
}

/// Arguments for the correlation command.
#[derive(Args, Debug)]
pub struct CorrelationArgs {
    /// Correlate returns or prices
    #[arg(long, value_enum, default_value = "returns")]
    pub of: CorrelationSource,

    /// Round entries to this many decimal places
    #[arg(long, default_value = "2")]
    pub decimals: usize,
}

/// Execute the correlation command.
pub fn execute(args: &CorrelationArgs, global: &GlobalArgs) -> Result<()> {
    let decimals = validate_precision(args.decimals)?;
    let pipeline = load_pipeline(global)?;

    let (matrix, heading) = match args.of {
        CorrelationSource::Returns => (pipeline.return_correlation(), "Correlation of Returns"),
        CorrelationSource::Prices => (pipeline.price_correlation(), "Correlation of Prices"),
    };

    #[allow(clippy::cast_possible_truncation)]
    let rounded = matrix.rounded(decimals as u32);
    title(global, heading);
    print_grid(&matrix_grid(&rounded), global.format, decimals)
}

/// Square grid labelled by asset on both axes.
pub fn matrix_grid(matrix: &CorrelationMatrix) -> Grid {
    let mut grid = Grid::new("", matrix.labels().to_vec());
    for (label, row) in matrix.labels().iter().zip(matrix.rows()) {
        grid.push(label.clone(), row.clone());
    }
    grid
}
