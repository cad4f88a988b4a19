//! Organization item catalog.

use serde::{Deserialize, Serialize};

use crate::ids::{ItemCategoryId, ItemId, OrganizationId};

fn default_active() -> bool {
    true
}

/// A tracked item. Inactive items are still reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub category_id: Option<ItemCategoryId>,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category_id: None,
            active: true,
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<ItemCategoryId>) -> Self {
        self.category_id = Some(category.into());
        self
    }

    #[must_use]
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCategory {
    pub id: ItemCategoryId,
    pub name: String,
}

impl ItemCategory {
    pub fn new(id: impl Into<ItemCategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// An organization and the catalog it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: OrganizationId,
    pub name: String,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub item_categories: Vec<ItemCategory>,
}

impl Organization {
    pub fn new(id: impl Into<OrganizationId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            items: Vec::new(),
            item_categories: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: ItemCategory) -> Self {
        self.item_categories.push(category);
        self
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn item_category(&self, id: ItemCategoryId) -> Option<&ItemCategory> {
        self.item_categories
            .iter()
            .find(|category| category.id == id)
    }
}
