//! Stats command implementation.
//!
//! Prints count, mean, std, min, quartiles and max of each asset's returns.

use anyhow::Result;
use folio_analytics::{SummaryStatistics, SUMMARY_LABELS};

use crate::cli::GlobalArgs;
use crate::commands::load_pipeline;
use crate::commands::tables::title;
use crate::output::{print_grid, Grid};

/// Execute the stats command.
pub fn execute(global: &GlobalArgs) -> Result<()> {
    let pipeline = load_pipeline(global)?;
    let stats = pipeline.summary_statistics();
    title(global, "Summary Statistics of Returns (%)");
    print_grid(&summary_grid(&stats), global.format, global.precision)
}

/// One row per statistic, one column per asset.
pub fn summary_grid(stats: &SummaryStatistics) -> Grid {
    let columns = stats.names().into_iter().map(String::from).collect();
    let mut grid = Grid::new("", columns);
    let arrays: Vec<[f64; 8]> = stats.columns.iter().map(|(_, s)| s.as_array()).collect();
    for (k, label) in SUMMARY_LABELS.iter().enumerate() {
        grid.push(*label, arrays.iter().map(|a| a[k]).collect());
    }
    grid
}
