//! # Folio Ext File
//!
//! File-based table sources for the Folio analytics pipeline.
//!
//! This crate turns CSV files into validated [`WideTable`](folio_core::WideTable)s:
//! - A header row, a date column and one numeric column per asset
//! - Missing or `NaN` cells become NaN values
//! - Rows sorted ascending by date
//!
//! [`CsvTableLoader`] memoizes loaded tables per canonical path, so repeated
//! pipeline runs over the same files do not re-read them.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod csv_table;
mod loader;

pub use csv_table::*;
pub use loader::*;
