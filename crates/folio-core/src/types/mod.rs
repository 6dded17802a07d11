//! Table types for portfolio analytics.
//!
//! - [`WideTable`]: one row per date, one named `f64` column per asset
//!   (prices, weights, returns, family weights)
//! - [`Series`]: a single named column over a date axis
//! - [`TidyTable`]: long form, one row per (date, category) pair

mod series;
mod table;
mod tidy;

pub use series::Series;
pub use table::{Column, WideTable};
pub use tidy::{TidyRow, TidyTable};

/// Calendar date used on every table's date axis.
pub type Date = chrono::NaiveDate;
