//! Asset family (category) bucketing of portfolio weights.

use folio_core::{Column, FolioError, FolioResult, WideTable};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One asset → family assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyEntry {
    /// Asset column name.
    pub asset: String,
    /// Family the asset rolls up into.
    pub family: String,
}

impl FamilyEntry {
    /// Creates a new entry.
    #[must_use]
    pub fn new(asset: impl Into<String>, family: impl Into<String>) -> Self {
        Self {
            asset: asset.into(),
            family: family.into(),
        }
    }
}

/// Ordered asset → family lookup.
///
/// Serializes as a plain list of entries, so it reads naturally from a
/// `[[families]]` TOML array. Family order is the order in which each family
/// first appears in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FamilyMapping {
    entries: Vec<FamilyEntry>,
}

impl FamilyMapping {
    /// Creates a mapping from a list of entries.
    #[must_use]
    pub fn new(entries: Vec<FamilyEntry>) -> Self {
        Self { entries }
    }

    /// Appends an assignment.
    #[must_use]
    pub fn with(mut self, asset: impl Into<String>, family: impl Into<String>) -> Self {
        self.entries.push(FamilyEntry::new(asset, family));
        self
    }

    /// The five-asset deployment: two fixed income, two equity, one alternative.
    #[must_use]
    pub fn default_deployment() -> Self {
        Self::new(Vec::new())
            .with("Asset1", "Fixed Income")
            .with("Asset2", "Fixed Income")
            .with("Asset3", "Equity")
            .with("Asset4", "Equity")
            .with("Asset5", "Alternative")
    }

    /// Returns the family of an asset.
    #[must_use]
    pub fn family_of(&self, asset: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.asset == asset)
            .map(|e| e.family.as_str())
    }

    /// Distinct families in first-appearance order.
    #[must_use]
    pub fn families(&self) -> Vec<&str> {
        let mut families: Vec<&str> = Vec::new();
        for e in &self.entries {
            if !families.contains(&e.family.as_str()) {
                families.push(&e.family);
            }
        }
        families
    }

    /// Assets assigned to a family, in mapping order.
    #[must_use]
    pub fn members(&self, family: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.family == family)
            .map(|e| e.asset.as_str())
            .collect()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the mapping has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks the mapping against a set of asset columns.
    ///
    /// # Errors
    ///
    /// - `Config` if an asset is listed twice
    /// - `UnmappedAsset` for the first asset with no family
    pub fn validate<S: AsRef<str>>(&self, assets: &[S]) -> FolioResult<()> {
        for (i, e) in self.entries.iter().enumerate() {
            if self.entries[..i].iter().any(|prev| prev.asset == e.asset) {
                return Err(FolioError::config(format!(
                    "asset '{}' is assigned to more than one family",
                    e.asset
                )));
            }
        }

        match assets
            .iter()
            .map(AsRef::as_ref)
            .find(|a| self.family_of(a).is_none())
        {
            Some(asset) => Err(FolioError::unmapped_asset(asset)),
            None => Ok(()),
        }
    }
}

/// Sums asset weights into family weights, date by date.
///
/// The output keeps the weight table's dates and has one column per family
/// in mapping order. A family whose members are all absent from the table is
/// a column of zeros. NaN weights propagate into their family's sum, so the
/// per-date total across families equals the total across assets.
///
/// # Errors
///
/// `UnmappedAsset` if a weight column has no family, or `Config` for a
/// mapping that lists an asset twice.
pub fn rollup_by_family(weights: &WideTable, mapping: &FamilyMapping) -> FolioResult<WideTable> {
    mapping.validate(&weights.column_names())?;

    let columns = mapping
        .families()
        .into_iter()
        .map(|family| {
            let members: Vec<&Column> = mapping
                .members(family)
                .into_iter()
                .filter_map(|asset| weights.column(asset))
                .collect();
            debug!(family, members = members.len(), "rolling up family");

            let values = (0..weights.nrows())
                .map(|i| members.iter().map(|c| c.values[i]).sum())
                .collect();
            Column::new(family, values)
        })
        .collect();

    WideTable::new(weights.dates().to_vec(), columns)
}
