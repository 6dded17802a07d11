//! Output formatting utilities.

use colored::Colorize;
use folio_core::{TidyTable, WideTable};
use serde::Serialize;
use serde_json::{Map, Value};
use tabled::{
    builder::Builder,
    settings::{object::Columns, Alignment, Modify, Style},
    Table,
};

use crate::cli::OutputFormat;

/// A labelled grid of numbers: one row label plus one value per column.
pub struct Grid {
    /// Header of the label column (e.g. `Date`).
    pub corner: String,
    /// Value column headers.
    pub columns: Vec<String>,
    /// `(row label, values)` in display order.
    pub rows: Vec<(String, Vec<f64>)>,
}

impl Grid {
    /// Creates an empty grid.
    pub fn new(corner: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            corner: corner.into(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Appends a row.
    pub fn push(&mut self, label: impl Into<String>, values: Vec<f64>) {
        self.rows.push((label.into(), values));
    }

    /// One row per date, one column per table column.
    pub fn from_wide(table: &WideTable) -> Self {
        let columns = table.column_names().into_iter().map(String::from).collect();
        let mut grid = Self::new("Date", columns);
        for (i, date) in table.dates().iter().enumerate() {
            grid.push(date.to_string(), table.row(i).unwrap_or_default());
        }
        grid
    }
}

/// Formats a number for display. Missing values are blank.
pub fn format_value(value: f64, precision: usize) -> String {
    if value.is_nan() {
        String::new()
    } else {
        format!("{value:.precision$}")
    }
}

/// JSON number, or null for NaN and infinities.
fn json_number(value: f64) -> Value {
    Value::from(value)
}

/// Prints a grid in the requested format.
pub fn print_grid(grid: &Grid, format: OutputFormat, precision: usize) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            if grid.rows.is_empty() {
                println!("No results.");
                return Ok(());
            }
            let mut builder = Builder::default();
            builder.push_record(std::iter::once(grid.corner.clone()).chain(grid.columns.clone()));
            for (label, values) in &grid.rows {
                builder.push_record(
                    std::iter::once(label.clone())
                        .chain(values.iter().map(|v| format_value(*v, precision))),
                );
            }
            print_table(builder.build());
        }
        OutputFormat::Json => {
            let records: Vec<Value> = grid
                .rows
                .iter()
                .map(|(label, values)| {
                    let mut record = Map::new();
                    record.insert(grid.corner.clone(), Value::from(label.as_str()));
                    for (name, v) in grid.columns.iter().zip(values) {
                        record.insert(name.clone(), json_number(*v));
                    }
                    Value::Object(record)
                })
                .collect();
            print_json(&records)?;
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            wtr.write_record(std::iter::once(&grid.corner).chain(&grid.columns))?;
            for (label, values) in &grid.rows {
                wtr.write_record(
                    std::iter::once(label.clone())
                        .chain(values.iter().map(|v| format_value(*v, precision))),
                )?;
            }
            wtr.flush()?;
        }
    }
    Ok(())
}

/// Prints a wide table, one row per date.
pub fn print_wide(table: &WideTable, format: OutputFormat, precision: usize) -> anyhow::Result<()> {
    print_grid(&Grid::from_wide(table), format, precision)
}

/// Prints a long-form table, one row per (date, category).
pub fn print_tidy(tidy: &TidyTable, format: OutputFormat, precision: usize) -> anyhow::Result<()> {
    let headers = ["Date", tidy.category_name.as_str(), tidy.value_name.as_str()];
    match format {
        OutputFormat::Table => {
            if tidy.is_empty() {
                println!("No results.");
                return Ok(());
            }
            let mut builder = Builder::default();
            builder.push_record(headers.map(String::from));
            for row in &tidy.rows {
                builder.push_record([
                    row.date.to_string(),
                    row.category.clone(),
                    format_value(row.value, precision),
                ]);
            }
            print_table(builder.build());
        }
        OutputFormat::Json => {
            let records: Vec<Value> = tidy
                .rows
                .iter()
                .map(|row| {
                    let mut record = Map::new();
                    record.insert(headers[0].to_string(), Value::from(row.date.to_string()));
                    record.insert(headers[1].to_string(), Value::from(row.category.as_str()));
                    record.insert(headers[2].to_string(), json_number(row.value));
                    Value::Object(record)
                })
                .collect();
            print_json(&records)?;
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            wtr.write_record(headers)?;
            for row in &tidy.rows {
                wtr.write_record([
                    row.date.to_string(),
                    row.category.clone(),
                    format_value(row.value, precision),
                ])?;
            }
            wtr.flush()?;
        }
    }
    Ok(())
}

/// Prints any serializable value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

fn print_table(mut table: Table) {
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()));
    println!("{table}");
}

/// Prints an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}
