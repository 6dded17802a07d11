//! Folio CLI - Command-line interface for portfolio analytics.
//!
//! # Usage
//!
//! ```bash
//! # Daily returns from the default data files
//! folio returns
//!
//! # Correlation of prices, as JSON
//! folio correlation --of prices --format json
//!
//! # Return scatter of two assets from explicit files
//! folio --prices prices.csv --weights weights.csv scatter Asset1 Asset3
//!
//! # Portfolio returns with rebalancing weights
//! folio portfolio --weight-mode time_varying
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.global.quiet);

    if let Err(e) = run(&cli) {
        output::print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn init_logging(quiet: bool) {
    let default = if quiet { "error" } else { "warn,folio=info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let global = &cli.global;

    match &cli.command {
        Commands::Prices(args) => commands::tables::prices(args, global),
        Commands::Returns(args) => commands::tables::returns(args, global),
        Commands::Stats => commands::stats::execute(global),
        Commands::Correlation(args) => commands::correlation::execute(args, global),
        Commands::Scatter(args) => commands::scatter::execute(args, global),
        Commands::Weights(args) => commands::tables::weights(args, global),
        Commands::Cumulative => commands::tables::cumulative(global),
        Commands::Portfolio => commands::portfolio::execute(global),
        Commands::Families => commands::tables::families(global),
        Commands::Report => commands::report::execute(global),
    }
}
