//! Filter resolution and per-record totals for filtered reports.

use std::collections::{BTreeSet, HashMap};

use rust_decimal::Decimal;
use tracing::{debug, warn};

use stock_model::{FilterScope, ItemId, Organization, RecordId, ReportFilter, cents_to_dollars};

use crate::error::{ExportError, Result};
use crate::record::PivotRecord;

/// A validated filter together with the display name used in headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterTarget {
    pub scope: FilterScope,
    /// Item or category name exactly as stored.
    pub name: String,
    /// Catalog items in scope. Category membership comes from the catalog,
    /// never from the copy carried on a line item.
    pub items: BTreeSet<ItemId>,
}

impl FilterTarget {
    pub fn covers(&self, item: ItemId) -> bool {
        self.items.contains(&item)
    }
}

/// Validate `filter` against the organization and look up its display name.
///
/// Returns `None` when no filter key is set.
pub fn resolve_filter(
    filter: &ReportFilter,
    organization: &Organization,
) -> Result<Option<FilterTarget>> {
    let Some(scope) = filter.scope()? else {
        return Ok(None);
    };
    let (name, items) = match scope {
        FilterScope::Item(item) => {
            let name = organization
                .item(item)
                .map(|item| item.name.clone())
                .ok_or(ExportError::UnknownFilterItem { item })?;
            (name, BTreeSet::from([item]))
        }
        FilterScope::Category(category) => {
            let name = organization
                .item_category(category)
                .map(|category| category.name.clone())
                .ok_or(ExportError::UnknownFilterCategory { category })?;
            let items = organization
                .items
                .iter()
                .filter(|item| item.category_id == Some(category))
                .map(|item| item.id)
                .collect();
            (name, items)
        }
    };
    debug!(?scope, name = %name, items = items.len(), "filter resolved");
    Ok(Some(FilterTarget { scope, name, items }))
}

/// Quantity and value of the filtered scope within one record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordTotals {
    pub quantity: i64,
    /// Dollars.
    pub value: Decimal,
}

/// Per-record totals; records missing from the lookup read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TotalsLookup {
    totals: HashMap<RecordId, RecordTotals>,
}

impl TotalsLookup {
    pub fn insert(&mut self, record: RecordId, totals: RecordTotals) {
        self.totals.insert(record, totals);
    }

    pub fn get(&self, record: RecordId) -> RecordTotals {
        self.totals.get(&record).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

impl FromIterator<(RecordId, RecordTotals)> for TotalsLookup {
    fn from_iter<I: IntoIterator<Item = (RecordId, RecordTotals)>>(iter: I) -> Self {
        Self {
            totals: iter.into_iter().collect(),
        }
    }
}

/// Computes filtered totals for a set of records.
///
/// How partially fulfilled or cancelled lines are counted belongs to the
/// implementation, not to the pivot engine.
pub trait TotalsSource<R> {
    fn compute(&self, records: &[R], target: &FilterTarget) -> TotalsLookup;
}

/// Sums quantity and value of the line items whose catalog item is in scope.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineItemTotals;

impl<R: PivotRecord> TotalsSource<R> for LineItemTotals {
    fn compute(&self, records: &[R], target: &FilterTarget) -> TotalsLookup {
        records
            .iter()
            .filter_map(|record| {
                let mut quantity = 0i64;
                let mut cents = 0i64;
                let mut matched = false;
                for line_item in record.line_items() {
                    if target.covers(line_item.item_id) {
                        matched = true;
                        quantity += i64::from(line_item.quantity);
                        cents += line_item.value_cents.unwrap_or(0);
                    }
                }
                matched.then(|| {
                    (
                        record.record_id(),
                        RecordTotals {
                            quantity,
                            value: cents_to_dollars(cents),
                        },
                    )
                })
            })
            .collect()
    }
}

/// Thread the filter scope through `source` and return the per-record lookup.
pub fn resolve_totals<R>(
    records: &[R],
    target: &FilterTarget,
    source: &dyn TotalsSource<R>,
) -> TotalsLookup {
    let lookup = source.compute(records, target);
    if lookup.is_empty() && !records.is_empty() {
        warn!(
            filter = %target.name,
            records = records.len(),
            "filter matched no line items; totals default to zero"
        );
    }
    lookup
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use stock_model::{Distribution, Item, ItemCategory, LineItem, ModelError};

    fn organization() -> Organization {
        Organization::new(1u64, "Org")
            .with_category(ItemCategory::new(10u64, "Test Category"))
            .with_item(Item::new(1u64, "Dupe Item").with_category(10u64))
            .with_item(Item::new(2u64, "Other"))
    }

    fn target(filter: ReportFilter) -> FilterTarget {
        resolve_filter(&filter, &organization()).unwrap().unwrap()
    }

    fn distribution(id: u64, lines: Vec<LineItem>) -> Distribution {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap();
        lines.into_iter().fold(
            Distribution::new(id, at, "Partner", "Warehouse"),
            Distribution::with_line_item,
        )
    }

    #[test]
    fn resolves_item_and_category_names() {
        let org = organization();
        let item = resolve_filter(&ReportFilter::by_item(1u64), &org).unwrap().unwrap();
        assert_eq!(item.name, "Dupe Item");
        let category = resolve_filter(&ReportFilter::by_category(10u64), &org)
            .unwrap()
            .unwrap();
        assert_eq!(category.name, "Test Category");
        assert_eq!(category.items, BTreeSet::from([ItemId::new(1)]));
        assert!(resolve_filter(&ReportFilter::none(), &org).unwrap().is_none());
    }

    #[test]
    fn unknown_targets_fail() {
        let org = organization();
        assert!(matches!(
            resolve_filter(&ReportFilter::by_item(99u64), &org),
            Err(ExportError::UnknownFilterItem { .. })
        ));
        assert!(matches!(
            resolve_filter(&ReportFilter::by_category(99u64), &org),
            Err(ExportError::UnknownFilterCategory { .. })
        ));
    }

    #[test]
    fn both_keys_fail_fast() {
        let filter = ReportFilter {
            by_item_id: Some(1u64.into()),
            by_item_category_id: Some(10u64.into()),
        };
        assert!(matches!(
            resolve_filter(&filter, &organization()),
            Err(ExportError::Model(ModelError::ConflictingFilter { .. }))
        ));
    }

    #[test]
    fn line_item_totals_by_item() {
        let records = vec![
            distribution(
                1,
                vec![
                    LineItem::new(1u64, "Dupe Item", 5).with_value_cents(250),
                    LineItem::new(2u64, "Other", 7).with_value_cents(700),
                    LineItem::new(1u64, "Dupe Item", 3).with_value_cents(150),
                ],
            ),
            distribution(2, vec![LineItem::new(2u64, "Other", 1)]),
        ];
        let lookup = LineItemTotals.compute(&records, &target(ReportFilter::by_item(1u64)));
        assert_eq!(
            lookup.get(RecordId::new(1)),
            RecordTotals {
                quantity: 8,
                value: Decimal::new(400, 2),
            }
        );
        assert_eq!(lookup.get(RecordId::new(2)), RecordTotals::default());
        assert_eq!(lookup.len(), 1);
    }

    #[test]
    fn line_item_totals_by_category() {
        let records = vec![distribution(
            1,
            vec![
                LineItem::new(1u64, "Dupe Item", 4).with_category(10u64),
                LineItem::new(2u64, "Other", 9),
            ],
        )];
        let lookup = LineItemTotals.compute(&records, &target(ReportFilter::by_category(10u64)));
        assert_eq!(lookup.get(RecordId::new(1)).quantity, 4);
    }

    #[test]
    fn category_membership_comes_from_catalog() {
        // Lines omit the category, or carry one the catalog disagrees with.
        let records = vec![distribution(
            1,
            vec![
                LineItem::new(1u64, "Dupe Item", 4).with_value_cents(400),
                LineItem::new(2u64, "Other", 9).with_category(10u64),
            ],
        )];
        let lookup = LineItemTotals.compute(&records, &target(ReportFilter::by_category(10u64)));
        assert_eq!(
            lookup.get(RecordId::new(1)),
            RecordTotals {
                quantity: 4,
                value: Decimal::new(400, 2),
            }
        );
    }
}
