//! Weight bucketing by classification.
//!
//! Rolls asset weights up into families (asset classes) through an
//! injectable [`FamilyMapping`]. Functions are pure: they take a weight table
//! and return a new one.
//!
//! # Example
//!
//! ```rust,ignore
//! use folio_analytics::bucketing::*;
//!
//! let by_family = rollup_by_family(&weights, &FamilyMapping::default_deployment())?;
//! let equity = by_family.series("Equity")?;
//! ```

mod family;

pub use family::*;
