//! # Folio Engine
//!
//! The configured analytics pipeline for Folio.
//!
//! This crate provides:
//! - [`PipelineConfig`]: file locations, weight mode and family mapping, from TOML
//! - [`Pipeline`]: every derived view over one price table and one weight table
//! - [`PipelineReport`]: all of those views in one serializable value
//!
//! ## Architecture
//!
//! ```text
//! prices.csv ──┐                ┌─> returns ─┬─> statistics, correlation, scatter
//!              ├─> CsvTableLoader┤            ├─> cumulative returns
//! weights.csv ─┘                └─> weights ─┴─> portfolio returns, family weights
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let config = PipelineConfig::from_file("folio.toml")?;
//! let loader = CsvTableLoader::new();
//! let pipeline = Pipeline::from_config(&config, &loader)?;
//!
//! let corr = pipeline.return_correlation();
//! let report = pipeline.report()?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod pipeline;
pub mod report;

pub use config::PipelineConfig;
pub use pipeline::{Pipeline, ASSET_LABEL};
pub use report::{PipelineReport, ScatterData, ScatterPoint};

pub use folio_ext_file::CsvTableLoader;
