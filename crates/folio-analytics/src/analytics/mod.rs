//! Return and aggregation analytics.
//!
//! This module derives everything the pipeline reports from a price table
//! and a weight table:
//! - Daily percentage returns
//! - Summary statistics per column
//! - Pairwise correlation matrices
//! - Compounded cumulative returns
//! - Weighted portfolio returns
//!
//! All functions are pure - they take tables and configuration as input
//! and return computed results. No caching, no I/O, no side effects.

mod correlation;
mod cumulative;
mod parallel;
mod portfolio;
mod returns;
mod stats;

pub use correlation::*;
pub use cumulative::*;
pub use parallel::*;
pub use portfolio::*;
pub use returns::*;
pub use stats::*;
