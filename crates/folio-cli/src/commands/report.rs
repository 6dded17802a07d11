//! Report command implementation.
//!
//! Prints every view the pipeline derives: as one JSON document, or as a
//! sequence of tables.

use anyhow::Result;

use crate::cli::{GlobalArgs, OutputFormat};
use crate::commands::correlation::matrix_grid;
use crate::commands::load_pipeline;
use crate::commands::portfolio::portfolio_grid;
use crate::commands::stats::summary_grid;
use crate::error::CliError;
use crate::output::{print_grid, print_header, print_json, print_wide};

/// Execute the report command.
pub fn execute(global: &GlobalArgs) -> Result<()> {
    if global.format == OutputFormat::Csv {
        return Err(CliError::UnsupportedFormat {
            command: "report",
            format: global.format,
        }
        .into());
    }

    let pipeline = load_pipeline(global)?;
    let report = pipeline.report()?;

    if global.format == OutputFormat::Json {
        return print_json(&report);
    }

    let format = global.format;
    let precision = global.precision;

    print_header("Prices");
    print_wide(&report.prices, format, precision)?;

    print_header("Daily Returns (%)");
    print_wide(&report.returns, format, precision)?;

    print_header("Summary Statistics of Returns (%)");
    print_grid(&summary_grid(&report.summary), format, precision)?;

    print_header("Correlation of Returns");
    print_grid(&matrix_grid(&report.return_correlation.rounded(2)), format, 2)?;

    print_header("Correlation of Prices");
    print_grid(&matrix_grid(&report.price_correlation.rounded(2)), format, 2)?;

    print_header("Portfolio Weights");
    print_wide(&report.weights, format, precision)?;

    print_header("Cumulative Returns");
    print_wide(&report.cumulative_returns, format, precision)?;

    print_header(&format!("Portfolio Returns ({})", report.weight_mode.code()));
    print_grid(
        &portfolio_grid(&report.portfolio_returns, &report.cumulative_portfolio_returns),
        format,
        precision,
    )?;

    print_header("Portfolio Weights by Asset Family");
    print_wide(&report.family_weights, format, precision)
}
