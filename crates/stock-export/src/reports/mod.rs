//! Report definitions sharing the pivot engine.
//!
//! | Report | Parent record | Filters |
//! |--------|---------------|---------|
//! | Donations | [`Donation`](stock_model::Donation) | none |
//! | Distributions | [`Distribution`](stock_model::Distribution) | item or category |
//! | Product drives | [`DriveWindow`](crate::record::DriveWindow) | issue-date window |

pub mod distributions;
pub mod donations;
pub mod product_drives;

use stock_model::ReportKind;

pub use distributions::export_distributions;
pub use donations::export_donations;
pub use product_drives::export_product_drives;

/// Fixed header names of a report, in column order.
pub fn base_headers(kind: ReportKind) -> Vec<&'static str> {
    match kind {
        ReportKind::Donations => donations::BASE_COLUMNS.iter().map(|c| c.name).collect(),
        ReportKind::Distributions => distributions::BASE_COLUMNS
            .iter()
            .map(|c| c.name)
            .collect(),
        ReportKind::ProductDrives => product_drives::base_columns()
            .iter()
            .map(|c| c.name)
            .collect(),
    }
}
