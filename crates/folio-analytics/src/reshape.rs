//! Wide ⇄ tidy reshaping for charting.
//!
//! Charting tools that colour lines by category expect long data: one row
//! per (date, asset). [`to_tidy`] unpivots a wide table without any
//! aggregation and [`from_tidy`] pivots it back.

use std::collections::{BTreeSet, HashMap};

use folio_core::{Column, Date, FolioError, FolioResult, TidyRow, TidyTable, WideTable};

/// Unpivots the selected columns of a wide table.
///
/// The table's date axis is the id column. Produces one row per
/// (source row, selected column), grouped by source row then by the order of
/// `value_columns`. The category label is the column name with `strip_suffix`
/// removed when present (e.g. `Asset1_return` → `Asset1`).
///
/// # Errors
///
/// `UnknownAsset` if a selected column does not exist.
pub fn to_tidy<S: AsRef<str>>(
    table: &WideTable,
    value_columns: &[S],
    category_name: &str,
    value_name: &str,
    strip_suffix: Option<&str>,
) -> FolioResult<TidyTable> {
    let selected = value_columns
        .iter()
        .map(|name| table.require_column(name.as_ref()))
        .collect::<FolioResult<Vec<_>>>()?;

    let labelled: Vec<(&Column, &str)> = selected
        .into_iter()
        .map(|c| {
            let label = match strip_suffix {
                Some(suffix) => c.name.strip_suffix(suffix).unwrap_or(&c.name),
                None => c.name.as_str(),
            };
            (c, label)
        })
        .collect();

    Ok(unpivot(table, &labelled, category_name, value_name))
}

/// Unpivots every column of a wide table.
#[must_use]
pub fn to_tidy_all(table: &WideTable, category_name: &str, value_name: &str) -> TidyTable {
    let labelled: Vec<(&Column, &str)> = table
        .columns()
        .iter()
        .map(|c| (c, c.name.as_str()))
        .collect();
    unpivot(table, &labelled, category_name, value_name)
}

fn unpivot(
    table: &WideTable,
    labelled: &[(&Column, &str)],
    category_name: &str,
    value_name: &str,
) -> TidyTable {
    let mut rows = Vec::with_capacity(table.nrows() * labelled.len());
    for (i, date) in table.dates().iter().enumerate() {
        for (column, label) in labelled {
            rows.push(TidyRow {
                date: *date,
                category: (*label).to_string(),
                value: column.values[i],
            });
        }
    }

    TidyTable {
        category_name: category_name.to_string(),
        value_name: value_name.to_string(),
        rows,
    }
}

/// Pivots a tidy table back into wide form.
///
/// Dates are sorted ascending; categories keep their first-appearance order.
/// Cells with no observation are NaN.
///
/// # Errors
///
/// `InvalidTable` if a (date, category) pair appears more than once.
pub fn from_tidy(tidy: &TidyTable) -> FolioResult<WideTable> {
    let dates: Vec<Date> = tidy
        .rows
        .iter()
        .map(|r| r.date)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let date_index: HashMap<Date, usize> = dates.iter().enumerate().map(|(i, d)| (*d, i)).collect();

    let categories = tidy.categories();
    let mut columns: Vec<Column> = categories
        .iter()
        .map(|c| Column::new(*c, vec![f64::NAN; dates.len()]))
        .collect();
    let mut filled = vec![vec![false; dates.len()]; columns.len()];

    for row in &tidy.rows {
        let j = categories
            .iter()
            .position(|c| *c == row.category)
            .ok_or_else(|| FolioError::invalid_table("category index out of sync"))?;
        let i = date_index[&row.date];
        if filled[j][i] {
            return Err(FolioError::invalid_table(format!(
                "duplicate observation for {} on {}",
                row.category, row.date
            )));
        }
        filled[j][i] = true;
        columns[j].values[i] = row.value;
    }

    WideTable::new(dates, columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> Date {
        Date::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn returns() -> WideTable {
        WideTable::new(
            vec![d(2), d(3)],
            vec![
                Column::new("Asset1_return", vec![1.0, 2.0]),
                Column::new("Asset2_return", vec![3.0, 4.0]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_row_order_and_labels() {
        let tidy = to_tidy(
            &returns(),
            &["Asset1_return", "Asset2_return"],
            "Asset",
            "Return (%)",
            Some("_return"),
        )
        .unwrap();

        assert_eq!(tidy.len(), 4);
        assert_eq!(tidy.category_name, "Asset");
        assert_eq!(tidy.value_name, "Return (%)");
        let flat: Vec<(Date, &str, f64)> = tidy
            .rows
            .iter()
            .map(|r| (r.date, r.category.as_str(), r.value))
            .collect();
        assert_eq!(
            flat,
            vec![
                (d(2), "Asset1", 1.0),
                (d(2), "Asset2", 3.0),
                (d(3), "Asset1", 2.0),
                (d(3), "Asset2", 4.0),
            ]
        );
    }

    #[test]
    fn test_subset_of_columns() {
        let tidy = to_tidy(&returns(), &["Asset2_return"], "Asset", "Return", None).unwrap();
        assert_eq!(tidy.len(), 2);
        assert_eq!(tidy.categories(), vec!["Asset2_return"]);
    }

    #[test]
    fn test_unknown_column() {
        let err = to_tidy(&returns(), &["Nope"], "Asset", "Return", None).unwrap_err();
        assert!(matches!(err, FolioError::UnknownAsset { .. }));
    }

    #[test]
    fn test_all_columns_matches_explicit_selection() {
        let wide = returns();
        let all = to_tidy_all(&wide, "Asset", "Return");
        let explicit = to_tidy(&wide, &wide.column_names(), "Asset", "Return", None).unwrap();
        assert_eq!(all, explicit);
        assert_eq!(all.categories(), vec!["Asset1_return", "Asset2_return"]);
    }

    #[test]
    fn test_round_trip() {
        let wide = returns();
        let tidy = to_tidy_all(&wide, "Asset", "Return");
        assert_eq!(tidy.len(), wide.nrows() * wide.ncols());
        assert_eq!(from_tidy(&tidy).unwrap(), wide);
    }

    #[test]
    fn test_from_tidy_rejects_duplicates() {
        let mut tidy = to_tidy_all(&returns(), "Asset", "Return");
        let dup = tidy.rows[0].clone();
        tidy.rows.push(dup);
        assert!(from_tidy(&tidy).is_err());
    }
}
