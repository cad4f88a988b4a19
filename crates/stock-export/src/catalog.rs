//! Item catalog resolution.

use std::collections::BTreeMap;

use stock_model::{Item, Organization};

/// Canonical case-insensitive key for an item name.
pub fn fold_name(name: &str) -> String {
    name.to_lowercase()
}

/// Distinct item names of the organization, one per case-folded name,
/// sorted by the folded name.
///
/// Inactive items are included. When several items fold to the same name the
/// one with the lowest id supplies the displayed spelling.
pub fn resolve_item_names(organization: &Organization) -> Vec<String> {
    let mut representatives: BTreeMap<String, &Item> = BTreeMap::new();
    for item in &organization.items {
        representatives
            .entry(fold_name(&item.name))
            .and_modify(|current| {
                if item.id < current.id {
                    *current = item;
                }
            })
            .or_insert(item);
    }
    representatives
        .into_values()
        .map(|item| item.name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stock_model::Item;

    fn org_with(names: &[(u64, &str)]) -> Organization {
        names
            .iter()
            .fold(Organization::new(1u64, "Org"), |org, (id, name)| {
                org.with_item(Item::new(*id, *name))
            })
    }

    #[test]
    fn sorts_case_insensitively() {
        let org = org_with(&[(1, "Zebra"), (2, "apple"), (3, "Banana")]);
        assert_eq!(resolve_item_names(&org), vec!["apple", "Banana", "Zebra"]);
    }

    #[test]
    fn folds_duplicates_to_lowest_id() {
        let org = org_with(&[(7, "new item"), (3, "New Item"), (9, "NEW ITEM")]);
        assert_eq!(resolve_item_names(&org), vec!["New Item"]);
    }

    #[test]
    fn keeps_inactive_items() {
        let org = Organization::new(1u64, "Org")
            .with_item(Item::new(1u64, "Wipes"))
            .with_item(Item::new(2u64, "Inactive Item").inactive());
        assert_eq!(resolve_item_names(&org), vec!["Inactive Item", "Wipes"]);
    }

    #[test]
    fn empty_catalog_resolves_to_nothing() {
        assert!(resolve_item_names(&Organization::new(1u64, "Org")).is_empty());
    }
}
