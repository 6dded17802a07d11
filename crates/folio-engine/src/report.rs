//! Serializable pipeline outputs.

use folio_analytics::{CorrelationMatrix, SummaryStatistics, WeightMode};
use folio_core::{Date, Series, WideTable};
use serde::Serialize;

/// One point of a two-asset return scatter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScatterPoint {
    /// Return date
    pub date: Date,
    /// Return of the x-axis asset (percent)
    pub x: f64,
    /// Return of the y-axis asset (percent)
    pub y: f64,
}

/// Paired daily returns of two assets.
///
/// Every return date is kept; a point with a NaN coordinate is left for the
/// plotting side to drop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterData {
    /// x-axis asset
    pub x_asset: String,
    /// y-axis asset
    pub y_asset: String,
    /// Points in date order
    pub points: Vec<ScatterPoint>,
}

impl ScatterData {
    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if there are no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points where both coordinates are present.
    pub fn complete_points(&self) -> impl Iterator<Item = &ScatterPoint> {
        self.points
            .iter()
            .filter(|p| !p.x.is_nan() && !p.y.is_nan())
    }
}

/// Every artifact the pipeline derives, in one serializable value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineReport {
    /// Weight selection used for portfolio returns
    pub weight_mode: WeightMode,
    /// Asset columns of the price table
    pub assets: Vec<String>,
    /// Price history
    pub prices: WideTable,
    /// Daily percentage returns
    pub returns: WideTable,
    /// Summary statistics of the returns
    pub summary: SummaryStatistics,
    /// Correlation of returns
    pub return_correlation: CorrelationMatrix,
    /// Correlation of prices
    pub price_correlation: CorrelationMatrix,
    /// Portfolio weights over time
    pub weights: WideTable,
    /// Compounded cumulative return per asset
    pub cumulative_returns: WideTable,
    /// Weighted portfolio return per date (percent)
    pub portfolio_returns: Series,
    /// Compounded cumulative portfolio return
    pub cumulative_portfolio_returns: Series,
    /// Weights rolled up by family
    pub family_weights: WideTable,
}
