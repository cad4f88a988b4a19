use thiserror::Error;

use stock_model::{ItemCategoryId, ItemId, ModelError, RecordId};

/// Errors raised while planning or assembling an export table.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Invalid request configuration (e.g. both filter keys set).
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Filter names an item the organization does not own.
    #[error("filter item {item} is not in the organization catalog")]
    UnknownFilterItem { item: ItemId },

    /// Filter names a category the organization does not own.
    #[error("filter category {category} is not in the organization catalog")]
    UnknownFilterCategory { category: ItemCategoryId },

    /// A line item refers to an item with no column in the plan.
    #[error("record {record} has a line item for '{item_name}' (item {item_id}) with no report column")]
    UnknownItemColumn {
        record: RecordId,
        item_id: ItemId,
        item_name: String,
    },

    /// Two columns fold to the same name.
    #[error("duplicate column in report plan: {name}")]
    DuplicateColumn { name: String },

    /// A filtered plan was assembled without the per-record totals.
    #[error("filtered report requires a totals lookup")]
    MissingTotals,
}

pub type Result<T> = std::result::Result<T, ExportError>;
