//! Error types for CSV output.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OutputError {
    /// The CSV writer rejected a record.
    #[error("Failed to encode CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Flushing or finishing the underlying writer failed.
    #[error("Failed to write CSV output: {0}")]
    Io(#[from] std::io::Error),

    /// Creating or writing the destination file failed.
    #[error("Failed to write CSV file {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Encoded bytes were not valid UTF-8.
    #[error("Encoded CSV is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result type for CSV output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
