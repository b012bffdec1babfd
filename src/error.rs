//! Error types for store_inventory

use std::path::PathBuf;
use thiserror::Error;

/// Why a single field of a source record could not be used
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Record ended before a required column
    #[error("missing {0} field")]
    MissingField(&'static str),
    /// Price column is not a number
    #[error("invalid price '{0}'")]
    InvalidPrice(String),
    /// Service date column is not MM/DD/YYYY
    #[error("invalid service date '{0}', expected MM/DD/YYYY")]
    InvalidDate(String),
}

/// Unified error type for loading, querying and exporting inventory
#[derive(Debug, Error)]
pub enum InventoryError {
    /// A named input source could not be opened
    #[error("Source unavailable: {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A source line failed numeric or date parsing
    #[error("Malformed record in {source_name} at line {line}: {reason}")]
    MalformedRecord {
        source_name: String,
        line: u64,
        #[source]
        reason: FieldError,
    },
    /// CSV reader failure (bad UTF-8, I/O while reading)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// Console or export I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store_inventory operations
pub type Result<T> = std::result::Result<T, InventoryError>;
