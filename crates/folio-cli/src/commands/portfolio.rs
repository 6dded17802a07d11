//! Portfolio command implementation.

use anyhow::Result;
use folio_core::Series;

use crate::cli::GlobalArgs;
use crate::commands::load_pipeline;
use crate::commands::tables::title;
use crate::output::{print_grid, Grid};

/// Execute the portfolio command.
pub fn execute(global: &GlobalArgs) -> Result<()> {
    let pipeline = load_pipeline(global)?;
    let returns = pipeline.portfolio_returns()?;
    let cumulative = pipeline.cumulative_portfolio_returns()?;

    title(
        global,
        &format!("Portfolio Returns ({})", pipeline.config().weight_mode.code()),
    );
    print_grid(
        &portfolio_grid(&returns, &cumulative),
        global.format,
        global.precision,
    )
}

/// Portfolio return and cumulative return side by side, one row per date.
pub fn portfolio_grid(returns: &Series, cumulative: &Series) -> Grid {
    let mut grid = Grid::new(
        "Date",
        vec!["Return (%)".to_string(), "Cumulative Return".to_string()],
    );
    for ((date, r), c) in returns.iter().zip(cumulative.values()) {
        grid.push(date.to_string(), vec![r, *c]);
    }
    grid
}
