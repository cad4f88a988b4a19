//! Record selection and ordering.
//!
//! Exports receive records already ordered: `created_at` ascending, ties
//! broken by id. An empty id list selects every record of the kind.

use chrono::{DateTime, Utc};

use stock_model::{Distribution, Donation, ProductDrive, RecordId};

use crate::error::{IngestError, Result};
use crate::snapshot::Snapshot;
use crate::validate::{DISTRIBUTION, DONATION, PRODUCT_DRIVE};

trait Selectable: Clone {
    const KIND: &'static str;

    fn id(&self) -> RecordId;
    fn created_at(&self) -> DateTime<Utc>;
}

impl Selectable for Donation {
    const KIND: &'static str = DONATION;

    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Selectable for Distribution {
    const KIND: &'static str = DISTRIBUTION;

    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Selectable for ProductDrive {
    const KIND: &'static str = PRODUCT_DRIVE;

    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

fn select<R: Selectable>(records: &[R], ids: &[RecordId]) -> Result<Vec<R>> {
    let mut selected: Vec<R> = if ids.is_empty() {
        records.to_vec()
    } else {
        let mut selected = Vec::with_capacity(ids.len());
        for &id in ids {
            if selected.iter().any(|record: &R| record.id() == id) {
                continue;
            }
            let record = records
                .iter()
                .find(|record| record.id() == id)
                .ok_or(IngestError::UnknownRecord {
                    kind: R::KIND,
                    record: id,
                })?;
            selected.push(record.clone());
        }
        selected
    };
    selected.sort_by_key(|record| (record.created_at(), record.id()));
    Ok(selected)
}

pub fn select_donations(snapshot: &Snapshot, ids: &[RecordId]) -> Result<Vec<Donation>> {
    select(&snapshot.donations, ids)
}

pub fn select_distributions(snapshot: &Snapshot, ids: &[RecordId]) -> Result<Vec<Distribution>> {
    select(&snapshot.distributions, ids)
}

pub fn select_product_drives(snapshot: &Snapshot, ids: &[RecordId]) -> Result<Vec<ProductDrive>> {
    select(&snapshot.product_drives, ids)
}
