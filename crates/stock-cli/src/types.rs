use std::path::PathBuf;

use stock_model::ReportKind;

/// What one export produced, for the summary table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    pub report: ReportKind,
    pub records: usize,
    pub columns: usize,
    /// Item quantity columns, or the filtered total/value pair.
    pub dynamic_columns: usize,
    pub filtered: bool,
    /// `None` when the CSV went to stdout.
    pub destination: Option<PathBuf>,
}
