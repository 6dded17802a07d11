//! Wide (one column per asset) date-indexed table.

use serde::Serialize;

use super::{Date, Series};
use crate::error::{FolioError, FolioResult};

/// A named column of `f64` values. Missing cells are `NaN`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    /// Column name (asset or family).
    pub name: String,
    /// One value per row of the owning table.
    pub values: Vec<f64>,
}

impl Column {
    /// Creates a new column.
    #[must_use]
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Iterates over the non-missing values of the column.
    pub fn valid_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied().filter(|v| !v.is_nan())
    }
}

/// A date-indexed table with one numeric column per asset.
///
/// Invariants, enforced by [`WideTable::new`]:
/// - dates are strictly ascending (unique)
/// - every column has exactly one value per date
/// - column names are unique and non-empty
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WideTable {
    dates: Vec<Date>,
    columns: Vec<Column>,
}

impl WideTable {
    /// Creates a validated table.
    pub fn new(dates: Vec<Date>, columns: Vec<Column>) -> FolioResult<Self> {
        if let Some(pair) = dates.windows(2).find(|w| w[0] >= w[1]) {
            return Err(FolioError::invalid_table(format!(
                "dates must be strictly ascending, found {} followed by {}",
                pair[0], pair[1]
            )));
        }

        for (i, column) in columns.iter().enumerate() {
            if column.name.is_empty() {
                return Err(FolioError::invalid_table(format!(
                    "column {} has an empty name",
                    i
                )));
            }
            if column.values.len() != dates.len() {
                return Err(FolioError::invalid_table(format!(
                    "column '{}' has {} values for {} dates",
                    column.name,
                    column.values.len(),
                    dates.len()
                )));
            }
            if columns[..i].iter().any(|c| c.name == column.name) {
                return Err(FolioError::invalid_table(format!(
                    "duplicate column '{}'",
                    column.name
                )));
            }
        }

        Ok(Self { dates, columns })
    }

    /// Creates a table with the given column names and no rows.
    #[must_use]
    pub fn empty<S: AsRef<str>>(names: &[S]) -> Self {
        Self {
            dates: Vec::new(),
            columns: names
                .iter()
                .map(|n| Column::new(n.as_ref(), Vec::new()))
                .collect(),
        }
    }

    /// Returns the date axis.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Returns all columns in order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Consumes the table, returning its date axis and columns.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Date>, Vec<Column>) {
        (self.dates, self.columns)
    }

    /// Returns the column names in order.
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Number of rows (dates).
    #[must_use]
    pub fn nrows(&self) -> usize {
        self.dates.len()
    }

    /// Number of value columns.
    #[must_use]
    pub fn ncols(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Returns the index of a column by name.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Returns a column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Returns a column by name, or an `UnknownAsset` error.
    pub fn require_column(&self, name: &str) -> FolioResult<&Column> {
        self.column(name)
            .ok_or_else(|| FolioError::unknown_asset(name, &self.column_names()))
    }

    /// Returns the value at a row for the named column.
    #[must_use]
    pub fn value(&self, row: usize, name: &str) -> Option<f64> {
        self.column(name).and_then(|c| c.values.get(row).copied())
    }

    /// Returns one row across all columns, in column order.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<Vec<f64>> {
        if row >= self.nrows() {
            return None;
        }
        Some(self.columns.iter().map(|c| c.values[row]).collect())
    }

    /// Returns the index of the latest row dated on or before `date`.
    #[must_use]
    pub fn row_on_or_before(&self, date: Date) -> Option<usize> {
        match self.dates.binary_search(&date) {
            Ok(i) => Some(i),
            Err(0) => None,
            Err(i) => Some(i - 1),
        }
    }

    /// Extracts a column as a [`Series`] sharing this table's date axis.
    pub fn series(&self, name: &str) -> FolioResult<Series> {
        let column = self.require_column(name)?;
        Series::new(column.name.clone(), self.dates.clone(), column.values.clone())
    }

    /// Returns a new table restricted to the named columns, in the given order.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> FolioResult<Self> {
        let columns = names
            .iter()
            .map(|n| self.require_column(n.as_ref()).cloned())
            .collect::<FolioResult<Vec<_>>>()?;
        Self::new(self.dates.clone(), columns)
    }

    /// Returns a new table with every column transformed by `f`, keeping names and dates.
    #[must_use]
    pub fn map_columns<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&[f64]) -> Vec<f64>,
    {
        Self {
            dates: self.dates.clone(),
            columns: self
                .columns
                .iter()
                .map(|c| {
                    let values = f(&c.values);
                    debug_assert_eq!(values.len(), c.values.len());
                    Column::new(c.name.clone(), values)
                })
                .collect(),
        }
    }

    /// Returns the sum across columns for each row. NaN cells propagate.
    #[must_use]
    pub fn row_sums(&self) -> Vec<f64> {
        (0..self.nrows())
            .map(|i| self.columns.iter().map(|c| c.values[i]).sum())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn d(day: u32) -> Date {
        Date::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn sample() -> WideTable {
        WideTable::new(
            vec![d(2), d(3), d(5)],
            vec![
                Column::new("Asset1", vec![1.0, 2.0, 3.0]),
                Column::new("Asset2", vec![10.0, f64::NAN, 30.0]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_shape() {
        let t = sample();
        assert_eq!(t.nrows(), 3);
        assert_eq!(t.ncols(), 2);
        assert_eq!(t.column_names(), vec!["Asset1", "Asset2"]);
        assert_eq!(t.position("Asset2"), Some(1));
        assert_eq!(t.value(2, "Asset2"), Some(30.0));
    }

    #[test]
    fn test_rejects_unsorted_dates() {
        let err = WideTable::new(vec![d(3), d(2)], vec![]).unwrap_err();
        assert!(matches!(err, FolioError::InvalidTable { .. }));
    }

    #[test]
    fn test_rejects_duplicate_dates() {
        let err = WideTable::new(vec![d(3), d(3)], vec![]).unwrap_err();
        assert!(err.to_string().contains("strictly ascending"));
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let err = WideTable::new(vec![d(2)], vec![Column::new("A", vec![1.0, 2.0])]).unwrap_err();
        assert!(err.to_string().contains("'A' has 2 values for 1 dates"));
    }

    #[test]
    fn test_rejects_duplicate_columns() {
        let err = WideTable::new(
            vec![d(2)],
            vec![Column::new("A", vec![1.0]), Column::new("A", vec![2.0])],
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate column 'A'"));
    }

    #[test]
    fn test_require_column_unknown() {
        let err = sample().require_column("AssetX").unwrap_err();
        match err {
            FolioError::UnknownAsset { asset, available } => {
                assert_eq!(asset, "AssetX");
                assert_eq!(available, vec!["Asset1", "Asset2"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_row_on_or_before() {
        let t = sample();
        assert_eq!(t.row_on_or_before(d(1)), None);
        assert_eq!(t.row_on_or_before(d(2)), Some(0));
        assert_eq!(t.row_on_or_before(d(4)), Some(1));
        assert_eq!(t.row_on_or_before(d(30)), Some(2));
    }

    #[test]
    fn test_select_and_series() {
        let t = sample();
        let s = t.select(&["Asset2", "Asset1"]).unwrap();
        assert_eq!(s.column_names(), vec!["Asset2", "Asset1"]);

        let series = t.series("Asset1").unwrap();
        assert_eq!(series.values(), &[1.0, 2.0, 3.0]);
        assert!(t.series("Nope").is_err());
    }

    #[test]
    fn test_row_sums_propagate_nan() {
        let sums = sample().row_sums();
        assert_relative_eq!(sums[0], 11.0);
        assert!(sums[1].is_nan());
        assert_relative_eq!(sums[2], 33.0);
    }

    #[test]
    fn test_valid_values_skip_nan() {
        let c = Column::new("Asset2", vec![10.0, f64::NAN, 30.0]);
        let valid: Vec<f64> = c.valid_values().collect();
        assert_eq!(valid.len(), 2);
        assert_relative_eq!(valid.iter().sum::<f64>(), 40.0);
    }

    #[test]
    fn test_serializes_nan_as_null() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("null"));
        assert!(json.contains("2024-01-02"));
    }
}
