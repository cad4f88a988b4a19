//! Line item aggregation shared by base extractors and totals.

use std::collections::BTreeMap;

use stock_model::LineItem;

use crate::catalog::fold_name;

/// Quantities summed per case-folded item name.
pub fn quantities_by_item<'a>(
    line_items: impl IntoIterator<Item = &'a LineItem>,
) -> BTreeMap<String, i64> {
    let mut quantities = BTreeMap::new();
    for line_item in line_items {
        *quantities.entry(fold_name(&line_item.item_name)).or_insert(0) +=
            i64::from(line_item.quantity);
    }
    quantities
}

pub fn total_quantity<'a>(line_items: impl IntoIterator<Item = &'a LineItem>) -> i64 {
    line_items
        .into_iter()
        .map(|line_item| i64::from(line_item.quantity))
        .sum()
}

/// Number of distinct items with a positive aggregated quantity.
///
/// Repeated line items for the same item count once.
pub fn item_variety<'a>(line_items: impl IntoIterator<Item = &'a LineItem>) -> i64 {
    let distinct = quantities_by_item(line_items)
        .values()
        .filter(|quantity| **quantity > 0)
        .count();
    i64::try_from(distinct).unwrap_or(i64::MAX)
}

/// Sum of line item values in cents; lines without a value contribute nothing.
pub fn total_value_cents<'a>(line_items: impl IntoIterator<Item = &'a LineItem>) -> i64 {
    line_items
        .into_iter()
        .filter_map(|line_item| line_item.value_cents)
        .sum()
}
