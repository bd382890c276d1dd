//! Error types for table lookups and custom table files.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

/// Errors that can occur while loading or rolling on tables.
#[derive(Debug, Error)]
pub enum TableError {
    /// No built-in or custom table has this name.
    #[error("unknown table: {0}")]
    UnknownTable(String),

    /// The table exists but has nothing to pick from.
    #[error("table '{0}' has no entries")]
    EmptyTable(String),

    /// A custom table file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A custom table file is not valid JSON of the expected shape.
    #[error("invalid table file: {0}")]
    Json(#[from] serde_json::Error),
}
