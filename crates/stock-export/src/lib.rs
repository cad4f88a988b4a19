//! Pivot engine for inventory CSV exports.
//!
//! A report is a fixed list of named base columns followed by one quantity
//! column per distinct catalog item (case-insensitive), or by a filtered
//! total/value pair. Data flows:
//!
//! ```text
//! resolve_item_names -> build_plan -> build_row (per record) -> generate_table
//! ```

pub mod aggregate;
pub mod catalog;
pub mod error;
pub mod plan;
pub mod record;
pub mod reports;
pub mod row;
pub mod table;
pub mod totals;

pub use aggregate::{item_variety, quantities_by_item, total_quantity, total_value_cents};
pub use catalog::{fold_name, resolve_item_names};
pub use error::{ExportError, Result};
pub use plan::{BaseColumn, ColumnPlan, DynamicColumns, build_plan};
pub use record::{DriveWindow, PivotRecord};
pub use reports::{base_headers, export_distributions, export_donations, export_product_drives};
pub use row::build_row;
pub use table::{ExportTable, generate_table};
pub use totals::{
    FilterTarget, LineItemTotals, RecordTotals, TotalsLookup, TotalsSource, resolve_filter,
    resolve_totals,
};
