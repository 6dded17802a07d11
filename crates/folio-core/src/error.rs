//! Error types for the Folio library.
//!
//! A single error enum is shared by the loader, the analytics functions and
//! the pipeline. Undefined arithmetic (zero prices, degenerate correlation
//! pairs) is never an error: it surfaces as NaN cells.

use thiserror::Error;

/// A specialized Result type for Folio operations.
pub type FolioResult<T> = Result<T, FolioError>;

/// The main error type for Folio operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FolioError {
    /// Input file does not exist.
    #[error("File not found: {path}")]
    MissingFile {
        /// The path that was requested.
        path: String,
    },

    /// Row/column shape or cell content of an input file is invalid.
    #[error("Malformed input in {source_name}: {reason}")]
    MalformedInput {
        /// File path or logical name of the input.
        source_name: String,
        /// Description of the problem.
        reason: String,
    },

    /// A requested asset is not a column of the table.
    #[error("Unknown asset '{asset}' (available: {})", .available.join(", "))]
    UnknownAsset {
        /// The requested asset name.
        asset: String,
        /// The asset columns that do exist.
        available: Vec<String>,
    },

    /// An asset column has no entry in the family mapping.
    #[error("Asset '{asset}' has no family in the mapping")]
    UnmappedAsset {
        /// The unmapped asset name.
        asset: String,
    },

    /// A table could not be constructed.
    #[error("Invalid table: {reason}")]
    InvalidTable {
        /// Why construction failed.
        reason: String,
    },

    /// Reading a file failed for a reason other than it being absent.
    #[error("IO error on {path}: {message}")]
    Io {
        /// The path being read.
        path: String,
        /// The underlying IO error message.
        message: String,
    },

    /// Configuration could not be loaded or is inconsistent.
    #[error("Configuration error: {reason}")]
    Config {
        /// Description of the problem.
        reason: String,
    },
}

impl FolioError {
    /// Create a missing file error.
    #[must_use]
    pub fn missing_file(path: impl Into<String>) -> Self {
        Self::MissingFile { path: path.into() }
    }

    /// Create a malformed input error.
    #[must_use]
    pub fn malformed(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    /// Create an unknown asset error listing the available columns.
    #[must_use]
    pub fn unknown_asset<S: AsRef<str>>(asset: impl Into<String>, available: &[S]) -> Self {
        Self::UnknownAsset {
            asset: asset.into(),
            available: available.iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }

    /// Create an unmapped asset error.
    #[must_use]
    pub fn unmapped_asset(asset: impl Into<String>) -> Self {
        Self::UnmappedAsset {
            asset: asset.into(),
        }
    }

    /// Create an invalid table error.
    #[must_use]
    pub fn invalid_table(reason: impl Into<String>) -> Self {
        Self::InvalidTable {
            reason: reason.into(),
        }
    }

    /// Create an IO error.
    #[must_use]
    pub fn io(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Io {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error.
    #[must_use]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Returns true if the error stems from the input files themselves
    /// (absent or malformed) rather than from a query against them.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::MissingFile { .. } | Self::MalformedInput { .. } | Self::Io { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FolioError::missing_file("data/prices.csv");
        assert_eq!(err.to_string(), "File not found: data/prices.csv");

        let err = FolioError::malformed("weights.csv", "record 3 has 4 fields, expected 6");
        assert!(err.to_string().contains("weights.csv"));
        assert!(err.to_string().contains("record 3"));

        let err = FolioError::unknown_asset("AssetX", &["Asset1", "Asset2"]);
        assert_eq!(
            err.to_string(),
            "Unknown asset 'AssetX' (available: Asset1, Asset2)"
        );

        let err = FolioError::unmapped_asset("Asset6");
        assert!(err.to_string().contains("Asset6"));
    }

    #[test]
    fn test_missing_and_malformed_are_distinct() {
        let missing = FolioError::missing_file("a.csv");
        let malformed = FolioError::malformed("a.csv", "bad row");
        assert_ne!(missing, malformed);
        assert!(missing.is_input_error());
        assert!(malformed.is_input_error());
        assert!(!FolioError::unmapped_asset("X").is_input_error());
    }
}
