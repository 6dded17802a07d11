//! The analytics pipeline over one price table and one weight table.

use std::sync::Arc;

use folio_analytics::prelude::*;
use folio_ext_file::CsvTableLoader;
use tracing::{info, warn};

use crate::config::PipelineConfig;
use crate::report::{PipelineReport, ScatterData, ScatterPoint};

/// Category column name used by every tidy output.
pub const ASSET_LABEL: &str = "Asset";

/// A validated price/weight pair and the analytics derived from it.
///
/// Returns are computed once at construction; every other query is computed
/// on demand from the stored tables and does not mutate them.
#[derive(Debug, Clone)]
pub struct Pipeline {
    prices: Arc<WideTable>,
    weights: Arc<WideTable>,
    returns: WideTable,
    families: FamilyMapping,
    config: AnalyticsConfig,
}

impl Pipeline {
    /// Builds a pipeline from loaded tables.
    ///
    /// # Errors
    ///
    /// - `UnknownAsset` if a weight column is not a price column
    /// - `UnmappedAsset` if a weight column has no family
    pub fn new(
        prices: Arc<WideTable>,
        weights: Arc<WideTable>,
        families: FamilyMapping,
        config: AnalyticsConfig,
    ) -> FolioResult<Self> {
        for name in weights.column_names() {
            prices.require_column(name)?;
        }
        families.validate(&weights.column_names())?;

        for (date, sum) in unnormalized_weight_rows(&weights, config.weight_sum_tolerance) {
            warn!(%date, sum, "portfolio weights do not sum to 1");
        }

        let returns = compute_returns(&prices, &config)?;

        info!(
            assets = prices.ncols(),
            price_rows = prices.nrows(),
            weight_rows = weights.nrows(),
            weight_mode = %config.weight_mode,
            "pipeline ready"
        );

        Ok(Self {
            prices,
            weights,
            returns,
            families,
            config,
        })
    }

    /// Loads both tables named by `config` through `loader` and builds a pipeline.
    pub fn from_config(config: &PipelineConfig, loader: &CsvTableLoader) -> FolioResult<Self> {
        let prices = loader.load(&config.prices_file)?;
        let weights = loader.load(&config.weights_file)?;
        Self::new(
            prices,
            weights,
            config.families.clone(),
            config.analytics_config(),
        )
    }

    /// Analytics settings in effect.
    #[must_use]
    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Family mapping in effect.
    #[must_use]
    pub fn families(&self) -> &FamilyMapping {
        &self.families
    }

    /// Price history.
    #[must_use]
    pub fn prices(&self) -> &WideTable {
        &self.prices
    }

    /// Portfolio weights over time.
    #[must_use]
    pub fn weights(&self) -> &WideTable {
        &self.weights
    }

    /// Asset names, in price column order.
    #[must_use]
    pub fn assets(&self) -> Vec<&str> {
        self.prices.column_names()
    }

    /// Daily percentage returns.
    #[must_use]
    pub fn returns(&self) -> &WideTable {
        &self.returns
    }

    /// Prices in long form (`Asset`, `Price`).
    #[must_use]
    pub fn tidy_prices(&self) -> TidyTable {
        to_tidy_all(&self.prices, ASSET_LABEL, "Price")
    }

    /// Returns in long form (`Asset`, `Return (%)`).
    #[must_use]
    pub fn tidy_returns(&self) -> TidyTable {
        to_tidy_all(&self.returns, ASSET_LABEL, "Return (%)")
    }

    /// Weights in long form (`Asset`, `Weight`).
    #[must_use]
    pub fn tidy_weights(&self) -> TidyTable {
        to_tidy_all(&self.weights, ASSET_LABEL, "Weight")
    }

    /// Summary statistics of the returns.
    #[must_use]
    pub fn summary_statistics(&self) -> SummaryStatistics {
        summary_statistics(&self.returns, &self.config)
    }

    /// Correlation matrix of the returns.
    #[must_use]
    pub fn return_correlation(&self) -> CorrelationMatrix {
        correlation_matrix(&self.returns, &self.config)
    }

    /// Correlation matrix of the price levels.
    #[must_use]
    pub fn price_correlation(&self) -> CorrelationMatrix {
        correlation_matrix(&self.prices, &self.config)
    }

    /// Daily returns of two assets, paired by date.
    ///
    /// # Errors
    ///
    /// `UnknownAsset` if either name is not an asset column.
    pub fn scatter(&self, x: &str, y: &str) -> FolioResult<ScatterData> {
        let xs = self.returns.require_column(x)?;
        let ys = self.returns.require_column(y)?;

        let points = self
            .returns
            .dates()
            .iter()
            .zip(xs.values.iter().zip(&ys.values))
            .map(|(date, (x, y))| ScatterPoint {
                date: *date,
                x: *x,
                y: *y,
            })
            .collect();

        Ok(ScatterData {
            x_asset: x.to_string(),
            y_asset: y.to_string(),
            points,
        })
    }

    /// Compounded cumulative return per asset.
    #[must_use]
    pub fn cumulative_returns(&self) -> WideTable {
        cumulative_returns(&self.returns, &self.config)
    }

    /// Weighted portfolio return per date, in percent.
    pub fn portfolio_returns(&self) -> FolioResult<Series> {
        portfolio_return(&self.returns, &self.weights, self.config.weight_mode)
    }

    /// Compounded cumulative portfolio return.
    pub fn cumulative_portfolio_returns(&self) -> FolioResult<Series> {
        cumulative_portfolio_returns(&self.returns, &self.weights, self.config.weight_mode)
    }

    /// Weights rolled up by family.
    pub fn family_weights(&self) -> FolioResult<WideTable> {
        rollup_by_family(&self.weights, &self.families)
    }

    /// Computes every artifact into one report.
    pub fn report(&self) -> FolioResult<PipelineReport> {
        let portfolio_returns = self.portfolio_returns()?;
        let cumulative_portfolio_returns = cumulative_series(&portfolio_returns)?;

        Ok(PipelineReport {
            weight_mode: self.config.weight_mode,
            assets: self.assets().into_iter().map(str::to_string).collect(),
            prices: self.prices.as_ref().clone(),
            returns: self.returns.clone(),
            summary: self.summary_statistics(),
            return_correlation: self.return_correlation(),
            price_correlation: self.price_correlation(),
            weights: self.weights.as_ref().clone(),
            cumulative_returns: self.cumulative_returns(),
            portfolio_returns,
            cumulative_portfolio_returns,
            family_weights: self.family_weights()?,
        })
    }
}
