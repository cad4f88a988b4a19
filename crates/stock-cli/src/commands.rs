use std::io;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::info_span;

use stock_export::{
    ExportTable, LineItemTotals, base_headers, export_distributions, export_donations,
    export_product_drives, resolve_item_names,
};
use stock_ingest::{
    Snapshot, load_snapshot, select_distributions, select_donations, select_product_drives,
};
use stock_model::{ExportRequest, ReportKind};
use stock_output::{write_csv, write_csv_file};

use crate::types::ExportOutcome;

/// Build the table `request` describes from an already loaded snapshot.
pub fn export_table(snapshot: &Snapshot, request: &ExportRequest) -> Result<ExportTable> {
    if !request.report.supports_filter() && !request.filter.is_empty() {
        bail!("{} exports do not accept item filters", request.report.label());
    }
    if request.report != ReportKind::ProductDrives && request.date_range.is_some() {
        bail!("{} exports do not accept a date range", request.report.label());
    }
    let organization = &snapshot.organization;
    let table = match request.report {
        ReportKind::Donations => {
            let donations =
                select_donations(snapshot, &request.record_ids).context("select donations")?;
            export_donations(organization, &donations)?
        }
        ReportKind::Distributions => {
            let distributions = select_distributions(snapshot, &request.record_ids)
                .context("select distributions")?;
            export_distributions(organization, &distributions, &request.filter, &LineItemTotals)?
        }
        ReportKind::ProductDrives => {
            let drives = select_product_drives(snapshot, &request.record_ids)
                .context("select product drives")?;
            export_product_drives(organization, &drives, request.date_range)?
        }
    };
    Ok(table)
}

/// Load the snapshot, export, and write CSV to `output` (stdout when `None`).
pub fn run_export(
    snapshot_path: &Path,
    request: &ExportRequest,
    output: Option<&Path>,
) -> Result<ExportOutcome> {
    let span = info_span!("run_export", report = request.report.label());
    let _guard = span.enter();

    let snapshot = load_snapshot(snapshot_path)
        .with_context(|| format!("load snapshot {}", snapshot_path.display()))?;
    let table = export_table(&snapshot, request)?;

    match output {
        Some(path) => write_csv_file(&table, path)
            .with_context(|| format!("write {}", path.display()))?,
        None => write_csv(&table, io::stdout().lock()).context("write CSV to stdout")?,
    }

    let base = base_headers(request.report).len();
    Ok(ExportOutcome {
        report: request.report,
        records: table.record_count(),
        columns: table.column_count(),
        dynamic_columns: table.column_count().saturating_sub(base),
        filtered: !request.filter.is_empty(),
        destination: output.map(Path::to_path_buf),
    })
}

/// The item column names an unfiltered export of this snapshot would use.
pub fn run_items(snapshot_path: &Path) -> Result<Vec<String>> {
    let snapshot = load_snapshot(snapshot_path)
        .with_context(|| format!("load snapshot {}", snapshot_path.display()))?;
    Ok(resolve_item_names(&snapshot.organization))
}
