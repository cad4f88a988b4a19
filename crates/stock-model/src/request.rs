//! Export request configuration.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::filter::ReportFilter;
use crate::ids::RecordId;

/// The three report callers sharing the pivot engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    Donations,
    Distributions,
    ProductDrives,
}

impl ReportKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Donations => "Donations",
            Self::Distributions => "Distributions",
            Self::ProductDrives => "Product Drives",
        }
    }

    /// Only distributions honour item/category filters.
    pub fn supports_filter(self) -> bool {
        matches!(self, Self::Distributions)
    }
}

/// Inclusive calendar date range.
///
/// Deserialization goes through [`DateRange::new`], so a reversed range is
/// rejected the same way whether it comes from code or from a request file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DateRangeFields")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Deserialize)]
struct DateRangeFields {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<DateRangeFields> for DateRange {
    type Error = ModelError;

    fn try_from(fields: DateRangeFields) -> Result<Self> {
        Self::new(fields.start, fields.end)
    }
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(ModelError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Everything needed to run one export besides the data itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRequest {
    pub report: ReportKind,
    /// Restrict to these records; empty means every record of the kind.
    #[serde(default)]
    pub record_ids: Vec<RecordId>,
    #[serde(default)]
    pub filter: ReportFilter,
    #[serde(default)]
    pub date_range: Option<DateRange>,
}

impl ExportRequest {
    pub fn new(report: ReportKind) -> Self {
        Self {
            report,
            record_ids: Vec::new(),
            filter: ReportFilter::none(),
            date_range: None,
        }
    }

    #[must_use]
    pub fn with_record_ids(mut self, ids: Vec<RecordId>) -> Self {
        self.record_ids = ids;
        self
    }

    #[must_use]
    pub fn with_filter(mut self, filter: ReportFilter) -> Self {
        self.filter = filter;
        self
    }

    #[must_use]
    pub fn with_date_range(mut self, range: Option<DateRange>) -> Self {
        self.date_range = range;
        self
    }
}
