//! Parent records as seen by the pivot engine.

use stock_model::{DateRange, Distribution, Donation, LineItem, ProductDrive, RecordId};

/// A parent record owning line items.
pub trait PivotRecord {
    fn record_id(&self) -> RecordId;

    fn line_items(&self) -> impl Iterator<Item = &LineItem>;
}

impl PivotRecord for Donation {
    fn record_id(&self) -> RecordId {
        self.id
    }

    fn line_items(&self) -> impl Iterator<Item = &LineItem> {
        self.line_items.iter()
    }
}

impl PivotRecord for Distribution {
    fn record_id(&self) -> RecordId {
        self.id
    }

    fn line_items(&self) -> impl Iterator<Item = &LineItem> {
        self.line_items.iter()
    }
}

/// A product drive viewed through an optional issue-date window.
///
/// Line items come from the drive's donations issued inside the window, or
/// from all of them when no window is set.
#[derive(Debug, Clone, Copy)]
pub struct DriveWindow<'a> {
    drive: &'a ProductDrive,
    range: Option<DateRange>,
}

impl<'a> DriveWindow<'a> {
    pub fn new(drive: &'a ProductDrive, range: Option<DateRange>) -> Self {
        Self { drive, range }
    }

    pub fn drive(&self) -> &'a ProductDrive {
        self.drive
    }

    /// Line items of every donation, ignoring the window.
    pub fn all_line_items(&self) -> impl Iterator<Item = &'a LineItem> + use<'a> {
        self.drive
            .donations
            .iter()
            .flat_map(|donation| donation.line_items.iter())
    }
}

impl PivotRecord for DriveWindow<'_> {
    fn record_id(&self) -> RecordId {
        self.drive.id
    }

    fn line_items(&self) -> impl Iterator<Item = &LineItem> {
        let range = self.range;
        self.drive
            .donations
            .iter()
            .filter(move |donation| {
                range.is_none_or(|range| range.contains(donation.issued_at.date_naive()))
            })
            .flat_map(|donation| donation.line_items.iter())
    }
}
