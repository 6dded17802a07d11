//! Portfolio weight selection modes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use folio_core::FolioError;

/// How asset weights are chosen when aggregating asset returns into a
/// portfolio return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightMode {
    /// Use the first row of the weight table for every date.
    ///
    /// Matches the historical dashboard output, which ignores later
    /// rebalancing rows.
    #[default]
    StaticFirstRow,

    /// Use, for each return date, the latest weight row dated on or before it.
    /// Return dates earlier than the first weight row use the first row.
    TimeVarying,
}

impl WeightMode {
    /// Returns a human-readable name for the weight mode.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::StaticFirstRow => "Static (first row)",
            Self::TimeVarying => "Time-varying",
        }
    }

    /// Returns the configuration code for the weight mode.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::StaticFirstRow => "static_first_row",
            Self::TimeVarying => "time_varying",
        }
    }
}

impl fmt::Display for WeightMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for WeightMode {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "static" | "static_first_row" | "first_row" => Ok(Self::StaticFirstRow),
            "time_varying" | "dynamic" => Ok(Self::TimeVarying),
            other => Err(FolioError::config(format!(
                "unknown weight mode '{}', expected static_first_row or time_varying",
                other
            ))),
        }
    }
}
