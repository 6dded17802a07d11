//! Pairwise Pearson correlation matrices.

use folio_core::{FolioError, FolioResult, WideTable};
use serde::Serialize;

use super::parallel::maybe_parallel_map;
use crate::types::AnalyticsConfig;

/// A square, symmetric correlation matrix labelled by column name on both axes.
///
/// Degenerate entries (fewer than two paired observations, or a constant
/// series) are NaN.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    labels: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Axis labels.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Matrix rows, in label order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// Matrix dimension.
    #[must_use]
    pub fn size(&self) -> usize {
        self.labels.len()
    }

    /// Returns the entry at `(i, j)`.
    #[must_use]
    pub fn value(&self, i: usize, j: usize) -> Option<f64> {
        self.values.get(i).and_then(|row| row.get(j)).copied()
    }

    /// Returns the correlation between two labelled columns.
    pub fn get(&self, a: &str, b: &str) -> FolioResult<f64> {
        let i = self.index_of(a)?;
        let j = self.index_of(b)?;
        Ok(self.values[i][j])
    }

    /// Returns a copy with every entry rounded to `decimals` places, as shown
    /// on heatmaps.
    #[must_use]
    pub fn rounded(&self, decimals: u32) -> Self {
        let factor = 10_f64.powi(decimals as i32);
        Self {
            labels: self.labels.clone(),
            values: self
                .values
                .iter()
                .map(|row| row.iter().map(|v| (v * factor).round() / factor).collect())
                .collect(),
        }
    }

    fn index_of(&self, label: &str) -> FolioResult<usize> {
        self.labels
            .iter()
            .position(|l| l == label)
            .ok_or_else(|| FolioError::unknown_asset(label, &self.labels))
    }
}

/// Pearson correlation of two equally long series, using only the positions
/// where both values are present.
///
/// Returns NaN with fewer than two complete pairs or when either side has
/// zero variance over those pairs. The result is clamped to `[-1, 1]`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y)
        .filter(|(a, b)| !a.is_nan() && !b.is_nan())
        .map(|(a, b)| (*a, *b))
        .collect();

    let n = pairs.len();
    if n < 2 {
        return f64::NAN;
    }

    let mean_x = pairs.iter().map(|p| p.0).sum::<f64>() / n as f64;
    let mean_y = pairs.iter().map(|p| p.1).sum::<f64>() / n as f64;

    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (a, b) in &pairs {
        let dx = a - mean_x;
        let dy = b - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    let denom = (sxx * syy).sqrt();
    if denom == 0.0 || !denom.is_finite() {
        return f64::NAN;
    }
    (sxy / denom).clamp(-1.0, 1.0)
}

/// Computes the pairwise Pearson correlation between every pair of columns.
///
/// Missing values are excluded per pair, not globally. The diagonal is
/// exactly 1.0 for columns with non-zero variance and NaN otherwise.
#[must_use]
pub fn correlation_matrix(table: &WideTable, config: &AnalyticsConfig) -> CorrelationMatrix {
    let columns = table.columns();
    let n = columns.len();
    let indices: Vec<usize> = (0..n).collect();

    // Upper triangle, row by row.
    let upper: Vec<Vec<f64>> = maybe_parallel_map(&indices, config, |&i| {
        (i..n)
            .map(|j| {
                let r = pearson(&columns[i].values, &columns[j].values);
                if i == j && !r.is_nan() {
                    1.0
                } else {
                    r
                }
            })
            .collect()
    });

    let mut values = vec![vec![f64::NAN; n]; n];
    for (i, row) in upper.iter().enumerate() {
        for (offset, r) in row.iter().enumerate() {
            let j = i + offset;
            values[i][j] = *r;
            values[j][i] = *r;
        }
    }

    CorrelationMatrix {
        labels: columns.iter().map(|c| c.name.clone()).collect(),
        values,
    }
}
