//! # Folio Analytics
//!
//! Return, statistics and allocation analytics over date-indexed asset tables.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: All calculations are stateless with explicit inputs
//! - **NaN, not errors**: undefined arithmetic (a zero price, a constant
//!   series) yields NaN cells; only structural problems are errors
//! - **Config-driven parallelism**: Optional rayon support with threshold-based switching
//!
//! ## Features
//!
//! - **Returns**: daily percentage change ×100, first row dropped
//! - **Statistics**: count, mean, std, min, quartiles, max per column
//! - **Correlation**: pairwise Pearson with per-pair missing value exclusion
//! - **Cumulative Returns**: compounded per asset and for the portfolio
//! - **Portfolio Returns**: static first-row or time-varying weights
//! - **Reshaping**: wide to tidy/long form and back
//! - **Bucketing**: asset to family weight rollups
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use folio_analytics::prelude::*;
//!
//! let config = AnalyticsConfig::default();
//! let returns = compute_returns(&prices, &config)?;
//! let corr = correlation_matrix(&returns, &config);
//! let portfolio = portfolio_return(&returns, &weights, WeightMode::StaticFirstRow)?;
//! let by_family = rollup_by_family(&weights, &FamilyMapping::default_deployment())?;
//! ```
//!
//! ## Module Overview
//!
//! - [`analytics`] - Returns, statistics, correlation, cumulative and portfolio returns
//! - [`bucketing`] - Family (asset class) rollups
//! - [`reshape`] - Wide/tidy conversion
//! - [`types`] - Configuration and weight modes
//!
//! ## Feature Flags
//!
//! - `parallel`: Enable rayon-based parallel processing for wide tables

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod analytics;
pub mod bucketing;
pub mod reshape;
pub mod types;

pub use types::{AnalyticsConfig, WeightMode};

pub use analytics::{
    compound, compute_returns, correlation_matrix, cumulative_portfolio_returns,
    cumulative_returns, cumulative_series, describe, pct_change, pearson, percentile,
    portfolio_return, summary_statistics, unnormalized_weight_rows, ColumnSummary,
    CorrelationMatrix, SummaryStatistics, PORTFOLIO_SERIES, SUMMARY_LABELS,
};
pub use bucketing::{rollup_by_family, FamilyEntry, FamilyMapping};
pub use reshape::{from_tidy, to_tidy, to_tidy_all};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::analytics::*;
    pub use crate::bucketing::*;
    pub use crate::reshape::*;
    pub use crate::types::*;
    pub use folio_core::prelude::*;
}
