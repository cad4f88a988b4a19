//! Error types for snapshot ingestion.

use std::path::{Path, PathBuf};
use thiserror::Error;

use stock_model::{ItemCategoryId, ItemId, RecordId};

#[derive(Debug, Error)]
pub enum IngestError {
    /// Failed to read the snapshot file.
    #[error("failed to read snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot is not valid JSON or does not match the expected shape.
    #[error("failed to parse snapshot{}: {source}", origin(.path.as_deref()))]
    Parse {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },

    /// A line item references an item the catalog does not know.
    #[error("{kind} {record}: line item references unknown item {item}")]
    UnknownItem {
        kind: &'static str,
        record: RecordId,
        item: ItemId,
    },

    /// A line item carries a name that disagrees with the catalog.
    #[error("{kind} {record}: line item names item {item} '{found}', catalog has '{expected}'")]
    ItemNameMismatch {
        kind: &'static str,
        record: RecordId,
        item: ItemId,
        found: String,
        expected: String,
    },

    /// A line item carries a category that disagrees with the catalog item.
    #[error("{kind} {record}: line item for item {item} names category {found}, catalog has {expected}")]
    ItemCategoryMismatch {
        kind: &'static str,
        record: RecordId,
        item: ItemId,
        found: ItemCategoryId,
        expected: String,
    },

    /// Two records of the same kind share an id.
    #[error("duplicate {kind} id {record}")]
    DuplicateRecord { kind: &'static str, record: RecordId },

    /// A requested record id is not in the snapshot.
    #[error("{kind} {record} not found in snapshot")]
    UnknownRecord { kind: &'static str, record: RecordId },
}

fn origin(path: Option<&Path>) -> String {
    path.map(|path| format!(" {}", path.display()))
        .unwrap_or_default()
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
