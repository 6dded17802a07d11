//! Descriptive statistics per column.

use folio_core::WideTable;
use serde::Serialize;

use super::parallel::maybe_parallel_map;
use crate::types::AnalyticsConfig;

/// Row labels of a summary table, in display order.
pub const SUMMARY_LABELS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

/// Descriptive statistics of one column.
///
/// Missing (NaN) values are excluded. Every field except `count` is NaN
/// when no value is available; `std` is NaN with fewer than two values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColumnSummary {
    /// Number of non-missing values.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator).
    pub std: f64,
    /// Minimum.
    pub min: f64,
    /// 25th percentile.
    pub q25: f64,
    /// Median.
    pub median: f64,
    /// 75th percentile.
    pub q75: f64,
    /// Maximum.
    pub max: f64,
}

impl ColumnSummary {
    /// Values in [`SUMMARY_LABELS`] order, with the count as `f64`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_array(&self) -> [f64; 8] {
        [
            self.count as f64,
            self.mean,
            self.std,
            self.min,
            self.q25,
            self.median,
            self.q75,
            self.max,
        ]
    }
}

/// Summary statistics for every column of a table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStatistics {
    /// `(column name, summary)` in the source table's column order.
    pub columns: Vec<(String, ColumnSummary)>,
}

impl SummaryStatistics {
    /// Returns the summary for a column.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ColumnSummary> {
        self.columns.iter().find(|(n, _)| n == name).map(|(_, s)| s)
    }

    /// Column names in order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Number of summarised columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if no columns were summarised.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Percentile of sorted, NaN-free data by linear interpolation between the
/// closest ranks, at position `(n - 1) * q`.
///
/// Returns NaN for empty input. `q` is clamped to `[0, 1]`.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn percentile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let h = (sorted.len() - 1) as f64 * q.clamp(0.0, 1.0);
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])
}

/// Describes a set of values, ignoring NaN.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn describe(values: impl IntoIterator<Item = f64>) -> ColumnSummary {
    let mut sorted: Vec<f64> = values.into_iter().filter(|v| !v.is_nan()).collect();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    if n == 0 {
        return ColumnSummary {
            count: 0,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            q25: f64::NAN,
            median: f64::NAN,
            q75: f64::NAN,
            max: f64::NAN,
        };
    }

    let mean = sorted.iter().sum::<f64>() / n as f64;
    let std = if n < 2 {
        f64::NAN
    } else {
        let ss: f64 = sorted.iter().map(|v| (v - mean).powi(2)).sum();
        (ss / (n - 1) as f64).sqrt()
    };

    ColumnSummary {
        count: n,
        mean,
        std,
        min: sorted[0],
        q25: percentile(&sorted, 0.25),
        median: percentile(&sorted, 0.5),
        q75: percentile(&sorted, 0.75),
        max: sorted[n - 1],
    }
}

/// Computes count, mean, sample std, min, quartiles and max for every column.
#[must_use]
pub fn summary_statistics(table: &WideTable, config: &AnalyticsConfig) -> SummaryStatistics {
    SummaryStatistics {
        columns: maybe_parallel_map(table.columns(), config, |c| {
            (c.name.clone(), describe(c.valid_values()))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use folio_core::{Column, Date};

    #[test]
    fn test_describe_basic() {
        let s = describe([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(s.count, 4);
        assert_relative_eq!(s.mean, 2.5);
        assert_relative_eq!(s.std, 1.290_994_448_735_805_6, epsilon = 1e-12);
        assert_relative_eq!(s.min, 1.0);
        assert_relative_eq!(s.q25, 1.75);
        assert_relative_eq!(s.median, 2.5);
        assert_relative_eq!(s.q75, 3.25);
        assert_relative_eq!(s.max, 4.0);
    }

    #[test]
    fn test_describe_skips_nan() {
        let s = describe([f64::NAN, 10.0, -10.0, f64::NAN]);
        assert_eq!(s.count, 2);
        assert_relative_eq!(s.mean, 0.0);
        assert_relative_eq!(s.median, 0.0);
        assert_relative_eq!(s.min, -10.0);
    }

    #[test]
    fn test_describe_single_and_empty() {
        let s = describe([5.0]);
        assert_eq!(s.count, 1);
        assert!(s.std.is_nan());
        assert_relative_eq!(s.q75, 5.0);

        let s = describe([f64::NAN]);
        assert_eq!(s.count, 0);
        assert!(s.mean.is_nan() && s.max.is_nan());
    }

    #[test]
    fn test_percentile_interpolates() {
        let sorted = [0.0, 10.0];
        assert_relative_eq!(percentile(&sorted, 0.25), 2.5);
        assert_relative_eq!(percentile(&sorted, 1.0), 10.0);
        assert!(percentile(&[], 0.5).is_nan());
    }

    #[test]
    fn test_summary_statistics_table() {
        let d1 = Date::from_ymd_opt(2024, 1, 2).unwrap();
        let d2 = Date::from_ymd_opt(2024, 1, 3).unwrap();
        let table = WideTable::new(
            vec![d1, d2],
            vec![
                Column::new("Asset1", vec![10.0, -10.0]),
                Column::new("Asset2", vec![1.0, 3.0]),
            ],
        )
        .unwrap();

        let stats = summary_statistics(&table, &AnalyticsConfig::default());
        assert_eq!(stats.names(), vec!["Asset1", "Asset2"]);
        assert_relative_eq!(stats.get("Asset2").unwrap().mean, 2.0);
        assert_eq!(stats.get("Asset1").unwrap().as_array()[0], 2.0);
        assert!(stats.get("Asset3").is_none());
    }
}
