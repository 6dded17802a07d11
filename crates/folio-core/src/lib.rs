//! # Folio Core
//!
//! Core table types and error handling for the Folio portfolio analytics library.
//!
//! This crate provides the foundational building blocks used throughout Folio:
//!
//! - **Types**: [`WideTable`] (one row per date, one column per asset),
//!   [`Series`] and the tidy/long [`TidyTable`] used for charting
//! - **Errors**: [`FolioError`], shared by the loader, analytics and engine crates
//!
//! ## Design Philosophy
//!
//! - **Validated construction**: a `WideTable` always has a strictly ascending
//!   date axis and equal-length, uniquely named columns
//! - **Missing values are NaN**: undefined arithmetic is carried through the
//!   tables instead of being raised
//!
//! ## Example
//!
//! ```rust
//! use folio_core::prelude::*;
//!
//! let d1 = Date::from_ymd_opt(2024, 1, 2).unwrap();
//! let d2 = Date::from_ymd_opt(2024, 1, 3).unwrap();
//! let prices = WideTable::new(
//!     vec![d1, d2],
//!     vec![Column::new("Asset1", vec![100.0, 101.0])],
//! )
//! .unwrap();
//! assert_eq!(prices.nrows(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod error;
pub mod types;

pub use error::{FolioError, FolioResult};
pub use types::{Column, Date, Series, TidyRow, TidyTable, WideTable};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{FolioError, FolioResult};
    pub use crate::types::{Column, Date, Series, TidyRow, TidyTable, WideTable};
}
