//! Donations export.

use tracing::info_span;

use stock_model::{
    Cell, DateStyle, Donation, DonationSource, MoneyStyle, Organization, cents_to_dollars,
};

use crate::aggregate::{item_variety, total_quantity, total_value_cents};
use crate::catalog::resolve_item_names;
use crate::error::Result;
use crate::plan::{BaseColumn, build_plan};
use crate::table::{ExportTable, generate_table};

/// Longest "Details" text for miscellaneous donations, omission included.
const DETAILS_LIMIT: usize = 25;
const OMISSION: &str = "...";

pub const BASE_COLUMNS: [BaseColumn<Donation>; 8] = [
    BaseColumn::new("Source", |donation| Cell::text(donation.source.label())),
    BaseColumn::new("Date", |donation| {
        Cell::date(donation.issued_at.date_naive(), DateStyle::Iso)
    }),
    BaseColumn::new("Details", details),
    BaseColumn::new("Storage Location", |donation| {
        Cell::optional_text(donation.storage_location_name.as_deref())
    }),
    BaseColumn::new("Quantity of Items", |donation| {
        Cell::integer(total_quantity(&donation.line_items))
    }),
    BaseColumn::new("Variety of Items", |donation| {
        Cell::integer(item_variety(&donation.line_items))
    }),
    BaseColumn::new("In-Kind Value", |donation| {
        Cell::money(
            cents_to_dollars(total_value_cents(&donation.line_items)),
            MoneyStyle::Plain,
        )
    }),
    BaseColumn::new("Comments", |donation| {
        Cell::optional_text(donation.comment.as_deref())
    }),
];

fn details(donation: &Donation) -> Cell {
    match donation.source {
        DonationSource::ProductDrive => Cell::optional_text(donation.product_drive_name.as_deref()),
        DonationSource::Manufacturer => Cell::optional_text(donation.manufacturer_name.as_deref()),
        DonationSource::DonationSite => {
            Cell::optional_text(donation.donation_site_name.as_deref())
        }
        DonationSource::Misc => donation
            .comment
            .as_deref()
            .map_or(Cell::Blank, |comment| Cell::Text(truncate_details(comment))),
    }
}

/// Shorten `text` to the details limit, cutting at the last whitespace that
/// leaves room for the omission marker.
fn truncate_details(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= DETAILS_LIMIT {
        return text.to_string();
    }
    let stop = DETAILS_LIMIT - OMISSION.len();
    let cut = (0..=stop)
        .rev()
        .find(|&index| chars[index].is_whitespace())
        .unwrap_or(stop);
    let mut truncated: String = chars[..cut].iter().collect();
    truncated.push_str(OMISSION);
    truncated
}

/// Export `donations` (already ordered by the caller) with one column per
/// catalog item of `organization`.
pub fn export_donations(organization: &Organization, donations: &[Donation]) -> Result<ExportTable> {
    let span = info_span!(
        "export",
        report = "donations",
        organization = %organization.id,
        records = donations.len()
    );
    let _guard = span.enter();
    let plan = build_plan(&BASE_COLUMNS, resolve_item_names(organization), None)?;
    generate_table(donations, &plan, None)
}
