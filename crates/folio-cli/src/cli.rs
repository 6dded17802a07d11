//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use folio_analytics::WeightMode;

use crate::commands::{CorrelationArgs, ScatterArgs, TableArgs};

/// Folio - Portfolio price, return and allocation analytics
#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Decimal places shown in tables
    #[arg(long, default_value = "4", global = true)]
    pub precision: usize,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Pipeline configuration file (TOML)
    #[arg(short, long, env = "FOLIO_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Price history CSV (overrides the config file)
    #[arg(long, global = true)]
    pub prices: Option<String>,

    /// Portfolio weights CSV (overrides the config file)
    #[arg(long, global = true)]
    pub weights: Option<String>,

    /// Weight selection for portfolio returns: static or time_varying
    #[arg(long, global = true)]
    pub weight_mode: Option<WeightMode>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Price history per asset
    Prices(TableArgs),

    /// Daily percentage returns per asset
    Returns(TableArgs),

    /// Summary statistics of the returns
    Stats,

    /// Correlation matrix of returns or prices
    Correlation(CorrelationArgs),

    /// Paired daily returns of two assets
    Scatter(ScatterArgs),

    /// Portfolio weights over time
    Weights(TableArgs),

    /// Compounded cumulative returns per asset
    Cumulative,

    /// Weighted portfolio returns and their cumulative curve
    Portfolio,

    /// Portfolio weights rolled up by asset family
    Families,

    /// Every view at once
    Report,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Table => "table",
            Self::Json => "json",
            Self::Csv => "csv",
        };
        f.write_str(name)
    }
}
