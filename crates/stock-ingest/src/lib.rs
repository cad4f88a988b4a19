//! Snapshot ingestion for inventory exports.
//!
//! Loads an organization snapshot from JSON, checks that every line item
//! agrees with the catalog, and selects the records an export will pivot.
//!
//! ```ignore
//! use std::path::Path;
//! use stock_ingest::{load_snapshot, select_donations};
//!
//! let snapshot = load_snapshot(Path::new("snapshot.json"))?;
//! let donations = select_donations(&snapshot, &[])?;
//! ```

mod error;
mod select;
mod snapshot;
mod validate;

pub use error::{IngestError, Result};
pub use select::{select_distributions, select_donations, select_product_drives};
pub use snapshot::{Snapshot, load_snapshot, parse_snapshot};
pub use validate::validate_snapshot;
