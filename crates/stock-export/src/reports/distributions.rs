//! Distributions export, with optional single item or category filter.

use tracing::info_span;

use stock_model::{
    Cell, DateStyle, Distribution, MoneyStyle, Organization, ReportFilter, cents_to_dollars,
};

use crate::aggregate::{total_quantity, total_value_cents};
use crate::catalog::resolve_item_names;
use crate::error::Result;
use crate::plan::{BaseColumn, build_plan};
use crate::table::{ExportTable, generate_table};
use crate::totals::{TotalsSource, resolve_filter, resolve_totals};

pub const BASE_COLUMNS: [BaseColumn<Distribution>; 11] = [
    BaseColumn::new("Partner", |distribution| {
        Cell::text(distribution.partner_name.as_str())
    }),
    BaseColumn::new("Initial Allocation", |distribution| {
        Cell::date(
            distribution.created_at.date_naive(),
            DateStyle::MonthDayYearSlash,
        )
    }),
    BaseColumn::new("Scheduled for", |distribution| {
        Cell::date(
            distribution.issued_at.date_naive(),
            DateStyle::MonthDayYearSlash,
        )
    }),
    BaseColumn::new("Source Inventory", |distribution| {
        Cell::text(distribution.storage_location_name.as_str())
    }),
    BaseColumn::new("Total Items", |distribution| {
        Cell::integer(total_quantity(&distribution.line_items))
    }),
    BaseColumn::new("Total Value", |distribution| {
        Cell::Decimal(cents_to_dollars(total_value_cents(
            &distribution.line_items,
        )))
    }),
    BaseColumn::new("Delivery Method", |distribution| {
        Cell::text(distribution.delivery_method.as_str())
    }),
    BaseColumn::new("Shipping Cost", |distribution| {
        Cell::money(
            cents_to_dollars(distribution.shipping_cost_cents),
            MoneyStyle::DollarPrefixed,
        )
    }),
    BaseColumn::new("Status", |distribution| {
        Cell::text(distribution.state.as_str())
    }),
    BaseColumn::new("Agency Representative", |distribution| {
        Cell::optional_text(distribution.agency_rep.as_deref())
    }),
    BaseColumn::new("Comments", |distribution| {
        Cell::optional_text(distribution.comment.as_deref())
    }),
];

/// Export `distributions` (already ordered by the caller).
///
/// Without a filter every catalog item gets a quantity column. With an item
/// or category filter those columns collapse into a "Total Number of" /
/// "Total Value of" pair fed by `totals`.
pub fn export_distributions(
    organization: &Organization,
    distributions: &[Distribution],
    filter: &ReportFilter,
    totals: &dyn TotalsSource<Distribution>,
) -> Result<ExportTable> {
    let span = info_span!(
        "export",
        report = "distributions",
        organization = %organization.id,
        records = distributions.len()
    );
    let _guard = span.enter();

    let target = resolve_filter(filter, organization)?;
    let plan = build_plan(
        &BASE_COLUMNS,
        resolve_item_names(organization),
        target.as_ref(),
    )?;
    let lookup = target
        .as_ref()
        .map(|target| resolve_totals(distributions, target, totals));
    generate_table(distributions, &plan, lookup.as_ref())
}
