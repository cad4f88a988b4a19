//! Product drives export.

use tracing::info_span;

use stock_model::{
    Cell, DateRange, DateStyle, MoneyStyle, Organization, ProductDrive, cents_to_dollars,
};

use crate::aggregate::{item_variety, total_quantity, total_value_cents};
use crate::catalog::resolve_item_names;
use crate::error::Result;
use crate::plan::{BaseColumn, build_plan};
use crate::record::{DriveWindow, PivotRecord};
use crate::table::{ExportTable, generate_table};

pub const BASE_COLUMN_COUNT: usize = 7;

/// Base columns for product drives.
///
/// Quantity and variety follow the drive's date window; the in-kind value
/// covers every donation of the drive.
pub fn base_columns<'a>() -> [BaseColumn<DriveWindow<'a>>; BASE_COLUMN_COUNT] {
    [
        BaseColumn::new("Product Drive Name", |window| {
            Cell::text(window.drive().name.as_str())
        }),
        BaseColumn::new("Start Date", |window| {
            Cell::date(window.drive().start_date, DateStyle::MonthDayYearDash)
        }),
        BaseColumn::new("End Date", |window| {
            Cell::optional_date(window.drive().end_date, DateStyle::MonthDayYearDash)
        }),
        BaseColumn::new("Held Virtually?", |window| {
            Cell::text(if window.drive().held_virtually {
                "Yes"
            } else {
                "No"
            })
        }),
        BaseColumn::new("Quantity of Items", |window| {
            Cell::integer(total_quantity(window.line_items()))
        }),
        BaseColumn::new("Variety of Items", |window| {
            Cell::integer(item_variety(window.line_items()))
        }),
        BaseColumn::new("In Kind Value", |window| {
            Cell::money(
                cents_to_dollars(total_value_cents(window.all_line_items())),
                MoneyStyle::Currency,
            )
        }),
    ]
}

/// Export `drives` (already ordered by the caller), counting donations issued
/// within `range` when one is given.
pub fn export_product_drives(
    organization: &Organization,
    drives: &[ProductDrive],
    range: Option<DateRange>,
) -> Result<ExportTable> {
    let span = info_span!(
        "export",
        report = "product_drives",
        organization = %organization.id,
        records = drives.len()
    );
    let _guard = span.enter();

    let windows: Vec<DriveWindow<'_>> = drives
        .iter()
        .map(|drive| DriveWindow::new(drive, range))
        .collect();
    let columns = base_columns();
    let plan = build_plan(&columns, resolve_item_names(organization), None)?;
    generate_table(&windows, &plan, None)
}
