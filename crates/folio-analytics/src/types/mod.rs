//! Configuration types for the analytics functions.

mod config;
mod weighting;

pub use config::AnalyticsConfig;
pub use weighting::WeightMode;
