//! Row construction for a single parent record.

use stock_model::Cell;

use crate::error::{ExportError, Result};
use crate::plan::{ColumnPlan, DynamicColumns};
use crate::record::PivotRecord;
use crate::totals::TotalsLookup;

/// Evaluate the base extractors, then fill the pivot columns.
///
/// Unfiltered plans start every item column at zero and add each line item's
/// quantity to the column of its item name. Filtered plans take quantity and
/// value from `totals` instead.
pub fn build_row<R: PivotRecord>(
    record: &R,
    plan: &ColumnPlan<'_, R>,
    totals: Option<&TotalsLookup>,
) -> Result<Vec<Cell>> {
    let base = plan.base_columns();
    let mut row = Vec::with_capacity(plan.len());
    row.extend(base.iter().map(|column| (column.extract)(record)));

    match plan.dynamic() {
        DynamicColumns::Items(names) => {
            let mut quantities = vec![0i64; names.len()];
            for line_item in record.line_items() {
                let Some(index) = plan.item_column(&line_item.item_name) else {
                    return Err(ExportError::UnknownItemColumn {
                        record: record.record_id(),
                        item_id: line_item.item_id,
                        item_name: line_item.item_name.clone(),
                    });
                };
                quantities[index - base.len()] += i64::from(line_item.quantity);
            }
            row.extend(quantities.into_iter().map(Cell::Integer));
        }
        DynamicColumns::FilteredTotals { .. } => {
            let totals = totals.ok_or(ExportError::MissingTotals)?;
            let record_totals = totals.get(record.record_id());
            row.push(Cell::Integer(record_totals.quantity));
            row.push(Cell::Decimal(record_totals.value));
        }
    }

    Ok(row)
}
