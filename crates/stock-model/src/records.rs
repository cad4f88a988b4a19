//! Parent records and the line items they own.
//!
//! Records are read-only snapshots supplied by the caller. Nothing in the
//! export path mutates or persists them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{ItemCategoryId, ItemId, RecordId};

/// An (item, quantity) pairing owned by exactly one parent record.
///
/// The item name and category are captured alongside the id, the way the
/// record was loaded with its items eagerly joined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub item_id: ItemId,
    pub item_name: String,
    #[serde(default)]
    pub item_category_id: Option<ItemCategoryId>,
    pub quantity: u32,
    /// Total value of this line in cents.
    #[serde(default)]
    pub value_cents: Option<i64>,
}

impl LineItem {
    pub fn new(item_id: impl Into<ItemId>, item_name: impl Into<String>, quantity: u32) -> Self {
        Self {
            item_id: item_id.into(),
            item_name: item_name.into(),
            item_category_id: None,
            quantity,
            value_cents: None,
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<ItemCategoryId>) -> Self {
        self.item_category_id = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_value_cents(mut self, cents: i64) -> Self {
        self.value_cents = Some(cents);
        self
    }
}

/// Where a donation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DonationSource {
    ProductDrive,
    Manufacturer,
    DonationSite,
    Misc,
}

impl DonationSource {
    /// Label shown in the "Source" column.
    pub fn label(self) -> &'static str {
        match self {
            Self::ProductDrive => "Product Drive",
            Self::Manufacturer => "Manufacturer",
            Self::DonationSite => "Donation Site",
            Self::Misc => "Misc. Donation",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Donation {
    pub id: RecordId,
    pub created_at: DateTime<Utc>,
    pub issued_at: DateTime<Utc>,
    pub source: DonationSource,
    #[serde(default)]
    pub product_drive_name: Option<String>,
    #[serde(default)]
    pub manufacturer_name: Option<String>,
    #[serde(default)]
    pub donation_site_name: Option<String>,
    #[serde(default)]
    pub storage_location_name: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
}

impl Donation {
    pub fn new(id: impl Into<RecordId>, issued_at: DateTime<Utc>, source: DonationSource) -> Self {
        Self {
            id: id.into(),
            created_at: issued_at,
            issued_at,
            source,
            product_drive_name: None,
            manufacturer_name: None,
            donation_site_name: None,
            storage_location_name: None,
            comment: None,
            line_items: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_line_item(mut self, line_item: LineItem) -> Self {
        self.line_items.push(line_item);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMethod {
    PickUp,
    Delivery,
    Shipped,
}

impl DeliveryMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PickUp => "pick_up",
            Self::Delivery => "delivery",
            Self::Shipped => "shipped",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionState {
    Scheduled,
    Complete,
}

impl DistributionState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Complete => "complete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    pub id: RecordId,
    pub created_at: DateTime<Utc>,
    pub issued_at: DateTime<Utc>,
    pub partner_name: String,
    pub storage_location_name: String,
    pub delivery_method: DeliveryMethod,
    #[serde(default)]
    pub shipping_cost_cents: i64,
    pub state: DistributionState,
    #[serde(default)]
    pub agency_rep: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
}

impl Distribution {
    pub fn new(
        id: impl Into<RecordId>,
        issued_at: DateTime<Utc>,
        partner_name: impl Into<String>,
        storage_location_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            created_at: issued_at,
            issued_at,
            partner_name: partner_name.into(),
            storage_location_name: storage_location_name.into(),
            delivery_method: DeliveryMethod::PickUp,
            shipping_cost_cents: 0,
            state: DistributionState::Scheduled,
            agency_rep: None,
            comment: None,
            line_items: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_line_item(mut self, line_item: LineItem) -> Self {
        self.line_items.push(line_item);
        self
    }
}

/// A donation collected by a product drive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveDonation {
    pub id: RecordId,
    pub issued_at: DateTime<Utc>,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDrive {
    pub id: RecordId,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "virtual", default)]
    pub held_virtually: bool,
    #[serde(default)]
    pub donations: Vec<DriveDonation>,
}
