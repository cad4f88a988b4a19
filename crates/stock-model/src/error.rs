use chrono::NaiveDate;
use thiserror::Error;

use crate::ids::{ItemCategoryId, ItemId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("filter sets both by_item_id ({item}) and by_item_category_id ({category}); choose one")]
    ConflictingFilter {
        item: ItemId,
        category: ItemCategoryId,
    },
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
}

pub type Result<T> = std::result::Result<T, ModelError>;
