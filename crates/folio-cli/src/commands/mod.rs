//! CLI command implementations.

pub mod correlation;
pub mod portfolio;
pub mod report;
pub mod scatter;
pub mod stats;
pub mod tables;

// Re-export argument types for convenience
pub use correlation::CorrelationArgs;
pub use scatter::ScatterArgs;
pub use tables::TableArgs;

use anyhow::{Context, Result};
use folio_engine::{CsvTableLoader, Pipeline, PipelineConfig};
use tracing::debug;

use crate::cli::GlobalArgs;
use crate::error::{CliError, CliResult, MAX_PRECISION};

/// Resolves the pipeline configuration: config file first, then flag overrides.
pub fn resolve_config(global: &GlobalArgs) -> Result<PipelineConfig> {
    let mut config = match &global.config {
        Some(path) => {
            debug!(path = %path.display(), "loading configuration");
            PipelineConfig::from_file(path)
                .with_context(|| format!("reading config {}", path.display()))?
        }
        None => PipelineConfig::default(),
    };

    if let Some(prices) = &global.prices {
        config.prices_file.clone_from(prices);
    }
    if let Some(weights) = &global.weights {
        config.weights_file.clone_from(weights);
    }
    if let Some(mode) = global.weight_mode {
        config.weight_mode = mode;
    }
    Ok(config)
}

/// Loads both input files and builds the pipeline.
pub fn load_pipeline(global: &GlobalArgs) -> Result<Pipeline> {
    validate_precision(global.precision)?;
    let config = resolve_config(global)?;
    let loader = CsvTableLoader::new();
    Ok(Pipeline::from_config(&config, &loader)?)
}

/// Validates a number of decimal places.
pub fn validate_precision(precision: usize) -> CliResult<usize> {
    if precision > MAX_PRECISION {
        return Err(CliError::InvalidPrecision(precision));
    }
    Ok(precision)
}
