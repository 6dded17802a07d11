//! Single named column over a date axis.

use serde::Serialize;

use super::Date;
use crate::error::{FolioError, FolioResult};

/// A named sequence of values, one per date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    name: String,
    dates: Vec<Date>,
    values: Vec<f64>,
}

impl Series {
    /// Creates a series, checking that dates and values line up.
    pub fn new(name: impl Into<String>, dates: Vec<Date>, values: Vec<f64>) -> FolioResult<Self> {
        let name = name.into();
        if dates.len() != values.len() {
            return Err(FolioError::invalid_table(format!(
                "series '{}' has {} values for {} dates",
                name,
                values.len(),
                dates.len()
            )));
        }
        Ok(Self {
            name,
            dates,
            values,
        })
    }

    /// Series name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Date axis.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Values, one per date.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the series has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(date, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Date, f64)> + '_ {
        self.dates.iter().copied().zip(self.values.iter().copied())
    }

    /// Returns a copy with a different name.
    #[must_use]
    pub fn renamed(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
