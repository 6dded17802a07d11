//! Compounded cumulative returns.

use folio_core::{FolioResult, Series, WideTable};

use super::parallel::maybe_parallel_map;
use crate::types::AnalyticsConfig;

/// Compounds percentage returns into cumulative returns.
///
/// `c[i] = Π_{j<=i} (1 + r[j] / 100) - 1`, expressed as a fraction
/// (0.10 means +10%). Missing returns are skipped: the position is NaN and
/// compounding resumes from the last level on the next valid return.
#[must_use]
pub fn compound(returns_pct: &[f64]) -> Vec<f64> {
    let mut level = 1.0;
    returns_pct
        .iter()
        .map(|r| {
            if r.is_nan() {
                f64::NAN
            } else {
                level *= 1.0 + r / 100.0;
                level - 1.0
            }
        })
        .collect()
}

/// Cumulative returns for every column of a percentage return table.
///
/// This compounds; it is not a running sum of returns. The output keeps
/// the input's dates and column names.
#[must_use]
pub fn cumulative_returns(returns: &WideTable, config: &AnalyticsConfig) -> WideTable {
    let compounded = maybe_parallel_map(returns.columns(), config, |c| compound(&c.values));
    let mut compounded = compounded.into_iter();
    returns.map_columns(|_| compounded.next().unwrap_or_default())
}

/// Cumulative return curve of a single percentage return series.
pub fn cumulative_series(returns: &Series) -> FolioResult<Series> {
    Series::new(
        returns.name(),
        returns.dates().to_vec(),
        compound(returns.values()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use folio_core::{Column, Date};

    #[test]
    fn test_compounds_not_sums() {
        let c = compound(&[10.0, -10.0]);
        assert_relative_eq!(c[0], 0.10, epsilon = 1e-12);
        assert_relative_eq!(c[1], -0.01, epsilon = 1e-12);
    }

    #[test]
    fn test_skips_missing() {
        let c = compound(&[10.0, f64::NAN, 10.0]);
        assert_relative_eq!(c[0], 0.10, epsilon = 1e-12);
        assert!(c[1].is_nan());
        assert_relative_eq!(c[2], 0.21, epsilon = 1e-12);
    }

    #[test]
    fn test_recurrence() {
        let r = [1.5, -0.3, 2.25, 0.0, -4.0];
        let c = compound(&r);
        for t in 1..r.len() {
            assert_relative_eq!(
                c[t],
                (1.0 + c[t - 1]) * (1.0 + r[t] / 100.0) - 1.0,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_table_keeps_shape_and_is_pure() {
        let d1 = Date::from_ymd_opt(2024, 1, 2).unwrap();
        let d2 = Date::from_ymd_opt(2024, 1, 3).unwrap();
        let returns = WideTable::new(
            vec![d1, d2],
            vec![
                Column::new("A", vec![10.0, -10.0]),
                Column::new("B", vec![0.0, 5.0]),
            ],
        )
        .unwrap();

        let config = AnalyticsConfig::default();
        let first = cumulative_returns(&returns, &config);
        let second = cumulative_returns(&returns, &config);

        assert_eq!(first, second);
        assert_eq!(first.dates(), returns.dates());
        assert_eq!(first.column_names(), vec!["A", "B"]);
        assert_relative_eq!(first.value(1, "B").unwrap(), 0.05, epsilon = 1e-12);
    }

    #[test]
    fn test_series() {
        let d1 = Date::from_ymd_opt(2024, 1, 2).unwrap();
        let s = Series::new("portfolio", vec![d1], vec![50.0]).unwrap();
        let c = cumulative_series(&s).unwrap();
        assert_eq!(c.name(), "portfolio");
        assert_relative_eq!(c.values()[0], 0.5);
    }
}
