//! CSV parsing into wide tables.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use chrono::NaiveDateTime;
use folio_core::{Column, Date, FolioError, FolioResult, WideTable};
use tracing::debug;

/// Date formats accepted in the date column, tried in order.
pub const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y"];

/// Date-time format accepted in the date column; the time part is dropped.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Cell spellings read as a missing value.
const MISSING_MARKERS: [&str; 4] = ["", "NaN", "nan", "NA"];

/// Parses a date cell.
pub fn parse_date(raw: &str) -> Option<Date> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| Date::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, DATETIME_FORMAT)
                .ok()
                .map(|dt| dt.date())
        })
}

/// Parses a numeric cell. Missing markers become NaN.
pub fn parse_value(raw: &str) -> Option<f64> {
    if MISSING_MARKERS.contains(&raw) {
        return Some(f64::NAN);
    }
    raw.parse().ok()
}

/// Reads a wide table from a CSV file without caching.
pub fn read_table(path: impl AsRef<Path>) -> FolioResult<WideTable> {
    let path = path.as_ref();
    let name = path.display().to_string();
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => FolioError::missing_file(&name),
        _ => FolioError::io(&name, e.to_string()),
    })?;
    parse_table(file, &name)
}

/// Parses CSV content into a wide table.
///
/// The header names the columns. The date column is the one named `date`
/// (any case), otherwise the first column. An unnamed leading column is a
/// row index and is dropped. Every other column is numeric.
///
/// `source_name` labels errors (usually the file path).
pub fn parse_table<R: Read>(input: R, source_name: &str) -> FolioResult<WideTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| csv_error(source_name, e))?
        .iter()
        .map(str::to_string)
        .collect();

    let layout = Layout::from_headers(&headers, source_name)?;

    let mut rows: Vec<(Date, Vec<f64>)> = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record.map_err(|e| csv_error(source_name, e))?;
        let row_number = i + 1;

        let raw_date = record.get(layout.date).unwrap_or_default();
        let date = parse_date(raw_date).ok_or_else(|| {
            FolioError::malformed(
                source_name,
                format!(
                    "row {}, column '{}': cannot parse date '{}'",
                    row_number, headers[layout.date], raw_date
                ),
            )
        })?;

        let values = layout
            .values
            .iter()
            .map(|&j| {
                let raw = record.get(j).unwrap_or_default();
                parse_value(raw).ok_or_else(|| {
                    FolioError::malformed(
                        source_name,
                        format!(
                            "row {}, column '{}': invalid number '{}'",
                            row_number, headers[j], raw
                        ),
                    )
                })
            })
            .collect::<FolioResult<Vec<_>>>()?;

        rows.push((date, values));
    }

    rows.sort_by_key(|(date, _)| *date);
    if let Some(pair) = rows.windows(2).find(|w| w[0].0 == w[1].0) {
        return Err(FolioError::malformed(
            source_name,
            format!("duplicate date {}", pair[0].0),
        ));
    }

    debug!(
        source = source_name,
        rows = rows.len(),
        columns = layout.values.len(),
        "parsed csv table"
    );

    let dates = rows.iter().map(|(d, _)| *d).collect();
    let columns = layout
        .values
        .iter()
        .enumerate()
        .map(|(k, &j)| Column::new(&headers[j], rows.iter().map(|(_, v)| v[k]).collect()))
        .collect();

    WideTable::new(dates, columns)
}

/// Positions of the date column and the value columns in a header row.
struct Layout {
    date: usize,
    values: Vec<usize>,
}

impl Layout {
    fn from_headers(headers: &[String], source_name: &str) -> FolioResult<Self> {
        let index_column = headers.len() > 1 && headers[0].is_empty();
        let first = usize::from(index_column);
        if headers.len() <= first {
            return Err(FolioError::malformed(source_name, "no header row"));
        }

        let date = headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case("date"))
            .unwrap_or(first);

        let values: Vec<usize> = (first..headers.len()).filter(|&j| j != date).collect();
        for (k, &j) in values.iter().enumerate() {
            if headers[j].is_empty() {
                return Err(FolioError::malformed(
                    source_name,
                    format!("column {} has an empty header", j + 1),
                ));
            }
            if values[..k].iter().any(|&prev| headers[prev] == headers[j]) {
                return Err(FolioError::malformed(
                    source_name,
                    format!("duplicate column '{}'", headers[j]),
                ));
            }
        }

        Ok(Self { date, values })
    }
}

fn csv_error(source_name: &str, e: csv::Error) -> FolioError {
    match e.kind() {
        csv::ErrorKind::UnequalLengths {
            pos,
            expected_len,
            len,
        } => FolioError::malformed(
            source_name,
            format!(
                "record {} has {} fields, expected {}",
                pos.as_ref().map_or(0, csv::Position::record),
                len,
                expected_len
            ),
        ),
        csv::ErrorKind::Io(io_err) => FolioError::io(source_name, io_err.to_string()),
        _ => FolioError::malformed(source_name, e.to_string()),
    }
}
