//! Snapshot document loading.
//!
//! A snapshot is one organization with its catalog and the parent records
//! an export may draw from. Money is carried as integer cents.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use stock_model::{Distribution, Donation, Organization, ProductDrive};

use crate::error::{IngestError, Result};
use crate::validate::validate_snapshot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub organization: Organization,
    #[serde(default)]
    pub donations: Vec<Donation>,
    #[serde(default)]
    pub distributions: Vec<Distribution>,
    #[serde(default)]
    pub product_drives: Vec<ProductDrive>,
}

impl Snapshot {
    pub fn new(organization: Organization) -> Self {
        Self {
            organization,
            donations: Vec::new(),
            distributions: Vec::new(),
            product_drives: Vec::new(),
        }
    }
}

/// Parse and validate snapshot JSON text.
pub fn parse_snapshot(text: &str) -> Result<Snapshot> {
    let snapshot: Snapshot =
        serde_json::from_str(text).map_err(|source| IngestError::Parse { path: None, source })?;
    validate_snapshot(&snapshot)?;
    Ok(snapshot)
}

/// Read, parse, and validate the snapshot at `path`.
pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    debug!(path = %path.display(), "reading snapshot");
    let text = fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let snapshot: Snapshot = serde_json::from_str(&text).map_err(|source| IngestError::Parse {
        path: Some(path.to_path_buf()),
        source,
    })?;
    validate_snapshot(&snapshot)?;
    info!(
        path = %path.display(),
        organization = %snapshot.organization.id,
        items = snapshot.organization.items.len(),
        donations = snapshot.donations.len(),
        distributions = snapshot.distributions.len(),
        product_drives = snapshot.product_drives.len(),
        "loaded snapshot"
    );
    Ok(snapshot)
}
