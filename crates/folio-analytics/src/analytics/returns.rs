//! Daily percentage returns from a wide price table.

use folio_core::{Column, FolioResult, WideTable};
use tracing::warn;

use super::parallel::maybe_parallel_map;
use crate::types::AnalyticsConfig;

/// Percentage change between consecutive values, ×100.
///
/// The output has one element fewer than the input. A zero previous value
/// yields the IEEE quotient (`inf`, `-inf` or NaN); a NaN operand yields NaN.
#[must_use]
pub fn pct_change(values: &[f64]) -> Vec<f64> {
    values
        .windows(2)
        .map(|w| (w[1] - w[0]) / w[0] * 100.0)
        .collect()
}

/// Converts a price table into a return table.
///
/// For each asset column and each row `i > 0`:
/// `return[i] = (price[i] - price[i-1]) / price[i-1] * 100`.
///
/// The first date is dropped from the date axis, so the result has one
/// row fewer than `prices`. A table with fewer than two rows produces an
/// empty table with the same columns.
///
/// # Example
///
/// ```rust,ignore
/// // prices A = [100, 110, 99] -> returns A = [10.0, -10.0]
/// let returns = compute_returns(&prices, &AnalyticsConfig::default())?;
/// ```
pub fn compute_returns(prices: &WideTable, config: &AnalyticsConfig) -> FolioResult<WideTable> {
    if prices.nrows() < 2 {
        return Ok(WideTable::empty(&prices.column_names()));
    }

    let columns = maybe_parallel_map(prices.columns(), config, |c| {
        let zero_prices = c.values[..c.values.len() - 1]
            .iter()
            .filter(|p| **p == 0.0)
            .count();
        if zero_prices > 0 {
            warn!(
                asset = %c.name,
                count = zero_prices,
                "zero prices produce undefined returns"
            );
        }
        Column::new(c.name.clone(), pct_change(&c.values))
    });

    WideTable::new(prices.dates()[1..].to_vec(), columns)
}
