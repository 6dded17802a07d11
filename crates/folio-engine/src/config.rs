//! Pipeline configuration.

use std::io;
use std::path::Path;

use folio_analytics::{AnalyticsConfig, FamilyMapping, WeightMode};
use folio_core::{FolioError, FolioResult};
use serde::{Deserialize, Serialize};

/// Pipeline configuration.
///
/// Every field has a default, so an empty TOML file is a valid config.
///
/// ```toml
/// prices_file = "./data/clean/asset_price_data.csv"
/// weights_file = "./data/raw/portfolio_weights.csv"
/// weight_mode = "time_varying"
///
/// [[families]]
/// asset = "Asset1"
/// family = "Fixed Income"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Price history CSV
    #[serde(default = "default_prices_file")]
    pub prices_file: String,

    /// Portfolio weights CSV
    #[serde(default = "default_weights_file")]
    pub weights_file: String,

    /// Weight selection for portfolio returns
    #[serde(default)]
    pub weight_mode: WeightMode,

    /// Asset → family assignments, in display order
    #[serde(default = "FamilyMapping::default_deployment")]
    pub families: FamilyMapping,

    /// Allowed deviation of a weight row's sum from 1 before a warning
    #[serde(default = "default_tolerance")]
    pub weight_sum_tolerance: f64,

    /// Enable parallel column processing (requires the `parallel` feature)
    #[serde(default = "default_true")]
    pub parallel: bool,
}

fn default_prices_file() -> String {
    "./data/clean/asset_price_data.csv".to_string()
}

fn default_weights_file() -> String {
    "./data/raw/portfolio_weights.csv".to_string()
}

fn default_tolerance() -> f64 {
    1e-6
}

fn default_true() -> bool {
    true
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            prices_file: default_prices_file(),
            weights_file: default_weights_file(),
            weight_mode: WeightMode::default(),
            families: FamilyMapping::default_deployment(),
            weight_sum_tolerance: default_tolerance(),
            parallel: true,
        }
    }
}

impl PipelineConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => FolioError::missing_file(&name),
            _ => FolioError::io(&name, e.to_string()),
        })?;
        Self::from_toml(&content).map_err(|e| match e {
            FolioError::Config { reason } => FolioError::config(format!("{name}: {reason}")),
            other => other,
        })
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> FolioResult<Self> {
        toml::from_str(content).map_err(|e| FolioError::config(e.message().to_string()))
    }

    /// Analytics settings derived from this configuration.
    #[must_use]
    pub fn analytics_config(&self) -> AnalyticsConfig {
        AnalyticsConfig::default()
            .with_parallel(self.parallel)
            .with_weight_mode(self.weight_mode)
            .with_weight_sum_tolerance(self.weight_sum_tolerance)
    }
}
