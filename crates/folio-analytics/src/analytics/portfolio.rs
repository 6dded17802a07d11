//! Weighted portfolio returns.

use folio_core::{Date, FolioError, FolioResult, Series, WideTable};
use tracing::{debug, warn};

use super::cumulative::cumulative_series;
use crate::types::WeightMode;

/// Name given to portfolio-level series.
pub const PORTFOLIO_SERIES: &str = "portfolio";

/// Resolves, for each weight column, the position of the matching return column.
fn align_weights(returns: &WideTable, weights: &WideTable) -> FolioResult<Vec<usize>> {
    let positions = weights
        .columns()
        .iter()
        .map(|w| {
            returns
                .position(&w.name)
                .ok_or_else(|| FolioError::unknown_asset(w.name.clone(), &returns.column_names()))
        })
        .collect::<FolioResult<Vec<_>>>()?;

    for c in returns.columns() {
        if weights.position(&c.name).is_none() {
            warn!(asset = %c.name, "asset has no weight column, contributes zero");
        }
    }

    Ok(positions)
}

/// Selects the weight row applied on `date`.
fn weight_row(weights: &WideTable, mode: WeightMode, date: Date) -> usize {
    match mode {
        WeightMode::StaticFirstRow => 0,
        WeightMode::TimeVarying => weights.row_on_or_before(date).unwrap_or(0),
    }
}

/// Weighted sum of asset returns at each date.
///
/// `portfolio[t] = Σ_asset returns[t, asset] × weight[asset]`, in the same
/// unit as `returns` (percent for a return table). Terms that are NaN are
/// skipped, so a row of missing returns sums to zero.
///
/// The weight vector depends on `mode`:
/// - [`WeightMode::StaticFirstRow`]: the first weight row, for every date
/// - [`WeightMode::TimeVarying`]: the latest weight row on or before each date
///
/// # Errors
///
/// - `UnknownAsset` if a weight column has no matching return column
/// - `InvalidTable` if the weight table has no rows
pub fn portfolio_return(
    returns: &WideTable,
    weights: &WideTable,
    mode: WeightMode,
) -> FolioResult<Series> {
    if weights.is_empty() {
        return Err(FolioError::invalid_table("weight table has no rows"));
    }

    let positions = align_weights(returns, weights)?;
    debug!(
        mode = mode.code(),
        assets = positions.len(),
        dates = returns.nrows(),
        "computing portfolio returns"
    );

    let values = returns
        .dates()
        .iter()
        .enumerate()
        .map(|(t, date)| {
            let w = weight_row(weights, mode, *date);
            weights
                .columns()
                .iter()
                .zip(&positions)
                .map(|(wc, &p)| returns.columns()[p].values[t] * wc.values[w])
                .filter(|term| !term.is_nan())
                .sum::<f64>()
        })
        .collect();

    Series::new(PORTFOLIO_SERIES, returns.dates().to_vec(), values)
}

/// Compounded cumulative portfolio return, as a fraction.
pub fn cumulative_portfolio_returns(
    returns: &WideTable,
    weights: &WideTable,
    mode: WeightMode,
) -> FolioResult<Series> {
    cumulative_series(&portfolio_return(returns, weights, mode)?)
}

/// Dates whose weight row does not sum to 1 within `tolerance`, with the sum.
#[must_use]
pub fn unnormalized_weight_rows(weights: &WideTable, tolerance: f64) -> Vec<(Date, f64)> {
    weights
        .dates()
        .iter()
        .zip(weights.row_sums())
        .filter(|(_, sum)| sum.is_nan() || (sum - 1.0).abs() > tolerance)
        .map(|(d, sum)| (*d, sum))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use folio_core::Column;

    fn d(day: u32) -> Date {
        Date::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn returns() -> WideTable {
        WideTable::new(
            vec![d(2), d(3), d(4)],
            vec![
                Column::new("A", vec![10.0, -10.0, 2.0]),
                Column::new("B", vec![0.0, 20.0, f64::NAN]),
            ],
        )
        .unwrap()
    }

    fn weights() -> WideTable {
        WideTable::new(
            vec![d(1), d(3)],
            vec![
                Column::new("A", vec![0.5, 1.0]),
                Column::new("B", vec![0.5, 0.0]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_static_first_row() {
        let p = portfolio_return(&returns(), &weights(), WeightMode::StaticFirstRow).unwrap();
        assert_eq!(p.name(), PORTFOLIO_SERIES);
        assert_eq!(p.dates(), returns().dates());
        assert_relative_eq!(p.values()[0], 5.0);
        assert_relative_eq!(p.values()[1], 5.0);
        // B is missing on the last date and is skipped
        assert_relative_eq!(p.values()[2], 1.0);
    }

    #[test]
    fn test_time_varying() {
        let p = portfolio_return(&returns(), &weights(), WeightMode::TimeVarying).unwrap();
        assert_relative_eq!(p.values()[0], 5.0);
        // rebalanced to 100% A on the 3rd
        assert_relative_eq!(p.values()[1], -10.0);
        assert_relative_eq!(p.values()[2], 2.0);
    }

    #[test]
    fn test_time_varying_before_first_weight_uses_first_row() {
        let w = WideTable::new(
            vec![d(10)],
            vec![Column::new("A", vec![1.0]), Column::new("B", vec![0.0])],
        )
        .unwrap();
        let p = portfolio_return(&returns(), &w, WeightMode::TimeVarying).unwrap();
        assert_relative_eq!(p.values()[0], 10.0);
    }

    #[test]
    fn test_unknown_weight_asset() {
        let w = WideTable::new(vec![d(1)], vec![Column::new("Z", vec![1.0])]).unwrap();
        let err = portfolio_return(&returns(), &w, WeightMode::StaticFirstRow).unwrap_err();
        assert!(matches!(err, FolioError::UnknownAsset { ref asset, .. } if asset == "Z"));
    }

    #[test]
    fn test_empty_weights() {
        let w = WideTable::empty(&["A"]);
        assert!(portfolio_return(&returns(), &w, WeightMode::StaticFirstRow).is_err());
    }

    #[test]
    fn test_cumulative_portfolio() {
        let c = cumulative_portfolio_returns(&returns(), &weights(), WeightMode::StaticFirstRow)
            .unwrap();
        assert_relative_eq!(c.values()[0], 0.05, epsilon = 1e-12);
        assert_relative_eq!(c.values()[1], 1.05 * 1.05 - 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_unnormalized_rows() {
        let w = WideTable::new(
            vec![d(1), d(2)],
            vec![Column::new("A", vec![0.4, 0.5]), Column::new("B", vec![0.6, 0.6])],
        )
        .unwrap();
        let rows = unnormalized_weight_rows(&w, 1e-6);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0, d(2));
        assert_relative_eq!(rows[0].1, 1.1, epsilon = 1e-12);
    }
}
