//! Consistency checks run on every loaded snapshot.
//!
//! Line items must point at catalog items under the catalog's own name and,
//! when they carry one, the catalog item's category. Record ids must be
//! unique per record kind.

use std::collections::HashSet;

use stock_model::{LineItem, Organization, RecordId};

use crate::error::{IngestError, Result};
use crate::snapshot::Snapshot;

pub(crate) const DONATION: &str = "donation";
pub(crate) const DISTRIBUTION: &str = "distribution";
pub(crate) const PRODUCT_DRIVE: &str = "product drive";
const DRIVE_DONATION: &str = "product drive donation";

pub fn validate_snapshot(snapshot: &Snapshot) -> Result<()> {
    let organization = &snapshot.organization;

    unique_ids(DONATION, snapshot.donations.iter().map(|d| d.id))?;
    for donation in &snapshot.donations {
        check_line_items(organization, DONATION, donation.id, &donation.line_items)?;
    }

    unique_ids(DISTRIBUTION, snapshot.distributions.iter().map(|d| d.id))?;
    for distribution in &snapshot.distributions {
        check_line_items(
            organization,
            DISTRIBUTION,
            distribution.id,
            &distribution.line_items,
        )?;
    }

    unique_ids(PRODUCT_DRIVE, snapshot.product_drives.iter().map(|d| d.id))?;
    for drive in &snapshot.product_drives {
        for donation in &drive.donations {
            check_line_items(organization, DRIVE_DONATION, donation.id, &donation.line_items)?;
        }
    }
    Ok(())
}

fn unique_ids(kind: &'static str, ids: impl Iterator<Item = RecordId>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(IngestError::DuplicateRecord { kind, record: id });
        }
    }
    Ok(())
}

fn check_line_items(
    organization: &Organization,
    kind: &'static str,
    record: RecordId,
    line_items: &[LineItem],
) -> Result<()> {
    for line_item in line_items {
        let item = organization
            .item(line_item.item_id)
            .ok_or(IngestError::UnknownItem {
                kind,
                record,
                item: line_item.item_id,
            })?;
        if item.name != line_item.item_name {
            return Err(IngestError::ItemNameMismatch {
                kind,
                record,
                item: item.id,
                found: line_item.item_name.clone(),
                expected: item.name.clone(),
            });
        }
        if let Some(found) = line_item.item_category_id
            && item.category_id != Some(found)
        {
            return Err(IngestError::ItemCategoryMismatch {
                kind,
                record,
                item: item.id,
                found,
                expected: item
                    .category_id
                    .map_or_else(|| "none".to_string(), |category| category.to_string()),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use stock_model::{Donation, DonationSource, Item};

    fn snapshot() -> Snapshot {
        Snapshot::new(Organization::new(1u64, "Bank").with_item(Item::new(4u64, "Wipes")))
    }

    fn donation(id: u64, line_item: LineItem) -> Donation {
        let issued = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Donation::new(id, issued, DonationSource::Misc).with_line_item(line_item)
    }

    #[test]
    fn accepts_consistent_snapshot() {
        let mut snapshot = snapshot();
        snapshot.donations.push(donation(1, LineItem::new(4u64, "Wipes", 2)));
        assert!(validate_snapshot(&snapshot).is_ok());
    }

    #[test]
    fn rejects_unknown_item() {
        let mut snapshot = snapshot();
        snapshot.donations.push(donation(1, LineItem::new(9u64, "Ghost", 2)));
        let err = validate_snapshot(&snapshot).unwrap_err();
        assert!(matches!(err, IngestError::UnknownItem { item, .. } if item.get() == 9));
    }

    #[test]
    fn rejects_renamed_line_item() {
        let mut snapshot = snapshot();
        snapshot.donations.push(donation(1, LineItem::new(4u64, "wipes", 2)));
        let err = validate_snapshot(&snapshot).unwrap_err();
        assert_eq!(
            err.to_string(),
            "donation 1: line item names item 4 'wipes', catalog has 'Wipes'"
        );
    }

    #[test]
    fn rejects_line_category_the_catalog_disagrees_with() {
        let mut snapshot = snapshot();
        snapshot
            .donations
            .push(donation(1, LineItem::new(4u64, "Wipes", 2).with_category(10u64)));
        let err = validate_snapshot(&snapshot).unwrap_err();
        assert_eq!(
            err.to_string(),
            "donation 1: line item for item 4 names category 10, catalog has none"
        );
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut snapshot = snapshot();
        snapshot.donations.push(donation(1, LineItem::new(4u64, "Wipes", 2)));
        snapshot.donations.push(donation(1, LineItem::new(4u64, "Wipes", 3)));
        let err = validate_snapshot(&snapshot).unwrap_err();
        assert!(matches!(err, IngestError::DuplicateRecord { kind: DONATION, .. }));
    }
}
