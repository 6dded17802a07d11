//! Long/tidy table: one row per (date, category) pair.

use serde::Serialize;

use super::Date;

/// One observation of a tidy table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TidyRow {
    /// Row date (the id column of the source wide table).
    pub date: Date,
    /// Category label, usually an asset name.
    pub category: String,
    /// Observed value.
    pub value: f64,
}

/// A long-form table, as expected by charting tools that colour by category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TidyTable {
    /// Display name of the category column (e.g. `Asset`).
    pub category_name: String,
    /// Display name of the value column (e.g. `Price`, `Return (%)`).
    pub value_name: String,
    /// Rows, grouped by source row then by source column order.
    pub rows: Vec<TidyRow>,
}

impl TidyTable {
    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct categories in first-appearance order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for row in &self.rows {
            if !seen.contains(&row.category.as_str()) {
                seen.push(&row.category);
            }
        }
        seen
    }
}
