//! CLI error types.

use thiserror::Error;

use crate::cli::OutputFormat;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The command cannot render in the requested format.
    #[error("The {command} command does not support --format {format}")]
    UnsupportedFormat {
        /// Command name.
        command: &'static str,
        /// Requested format.
        format: OutputFormat,
    },

    /// Too many decimal places requested.
    #[error("Invalid precision: {0}. Must be at most {max}.", max = MAX_PRECISION)]
    InvalidPrecision(usize),
}

/// Largest accepted `--precision` / `--decimals`.
pub const MAX_PRECISION: usize = 12;

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
