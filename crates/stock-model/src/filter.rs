//! Report filter parameters.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::ids::{ItemCategoryId, ItemId};

/// Raw filter parameters as supplied by the caller.
///
/// At most one key may be set; absence of both means the full pivot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by_item_id: Option<ItemId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by_item_category_id: Option<ItemCategoryId>,
}

/// A validated single-item or single-category selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterScope {
    Item(ItemId),
    Category(ItemCategoryId),
}

impl ReportFilter {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn by_item(id: impl Into<ItemId>) -> Self {
        Self {
            by_item_id: Some(id.into()),
            by_item_category_id: None,
        }
    }

    pub fn by_category(id: impl Into<ItemCategoryId>) -> Self {
        Self {
            by_item_id: None,
            by_item_category_id: Some(id.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.by_item_id.is_none() && self.by_item_category_id.is_none()
    }

    /// Validate the filter. Setting both keys is a configuration error.
    pub fn scope(&self) -> Result<Option<FilterScope>> {
        match (self.by_item_id, self.by_item_category_id) {
            (None, None) => Ok(None),
            (Some(item), None) => Ok(Some(FilterScope::Item(item))),
            (None, Some(category)) => Ok(Some(FilterScope::Category(category))),
            (Some(item), Some(category)) => Err(ModelError::ConflictingFilter { item, category }),
        }
    }
}
