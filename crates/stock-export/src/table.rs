//! Table assembly: header row followed by one row per parent record.

use std::time::Instant;

use tracing::info;

use stock_model::Cell;

use crate::error::Result;
use crate::plan::ColumnPlan;
use crate::record::PivotRecord;
use crate::row::build_row;
use crate::totals::TotalsLookup;

/// A fully materialized export: header plus data rows in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTable {
    header: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl ExportTable {
    pub fn new(header: Vec<String>) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Data rows, excluding the header.
    pub fn record_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Index of the first header equal to `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|header| header == name)
    }

    /// Header row (as text cells) followed by the data rows.
    pub fn into_matrix(self) -> Vec<Vec<Cell>> {
        let mut matrix = Vec::with_capacity(self.rows.len() + 1);
        matrix.push(self.header.into_iter().map(Cell::Text).collect());
        matrix.extend(self.rows);
        matrix
    }
}

/// Build the table for `records`, preserving their order.
///
/// No records yields a header-only table.
pub fn generate_table<R: PivotRecord>(
    records: &[R],
    plan: &ColumnPlan<'_, R>,
    totals: Option<&TotalsLookup>,
) -> Result<ExportTable> {
    let start = Instant::now();
    let mut table = ExportTable::new(plan.header().to_vec());
    for record in records {
        table.push_row(build_row(record, plan, totals)?);
    }
    info!(
        records = table.record_count(),
        columns = table.column_count(),
        duration_ms = start.elapsed().as_millis(),
        "export table assembled"
    );
    Ok(table)
}
