//! CSV encoding of export tables.
//!
//! The header row comes first, then one row per record, every field
//! rendered through [`render_cell`]. Quoting is delegated to the `csv`
//! writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use stock_export::ExportTable;
use tracing::debug;

use crate::error::{OutputError, Result};
use crate::format::render_cell;

/// Stream `table` into `writer`.
pub fn write_csv<W: Write>(table: &ExportTable, writer: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(table.header())?;
    for row in table.rows() {
        csv_writer.write_record(row.iter().map(render_cell))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Encode `table` as a CSV string.
pub fn encode_csv(table: &ExportTable) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(table, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Write `table` to a file at `path`, replacing any existing file.
pub fn write_csv_file(table: &ExportTable, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| OutputError::File {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    write_csv(table, &mut writer)?;
    writer.flush().map_err(|source| OutputError::File {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        path = %path.display(),
        rows = table.record_count(),
        "wrote CSV export"
    );
    Ok(())
}
