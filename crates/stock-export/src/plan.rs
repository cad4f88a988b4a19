//! Column plans: fixed base columns followed by pivot columns.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use stock_model::Cell;

use crate::catalog::fold_name;
use crate::error::{ExportError, Result};
use crate::totals::FilterTarget;

/// A named extractor over a parent record. Header and value are declared
/// together so they cannot drift apart.
pub struct BaseColumn<R> {
    pub name: &'static str,
    pub extract: fn(&R) -> Cell,
}

impl<R> BaseColumn<R> {
    pub const fn new(name: &'static str, extract: fn(&R) -> Cell) -> Self {
        Self { name, extract }
    }
}

impl<R> Clone for BaseColumn<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for BaseColumn<R> {}

impl<R> fmt::Debug for BaseColumn<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseColumn").field("name", &self.name).finish()
    }
}

/// Shape of the columns after the base columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DynamicColumns {
    /// One quantity column per catalog item name.
    Items(Vec<String>),
    /// "Total Number of" / "Total Value of" pair for a filtered item or category.
    FilteredTotals { name: String },
}

impl DynamicColumns {
    pub fn len(&self) -> usize {
        match self {
            Self::Items(names) => names.len(),
            Self::FilteredTotals { .. } => 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Header row and column lookup for one export call.
pub struct ColumnPlan<'c, R> {
    base: &'c [BaseColumn<R>],
    dynamic: DynamicColumns,
    header: Vec<String>,
    item_index: HashMap<String, usize>,
}

impl<R> fmt::Debug for ColumnPlan<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnPlan")
            .field("header", &self.header)
            .field("dynamic", &self.dynamic)
            .finish_non_exhaustive()
    }
}

impl<'c, R> ColumnPlan<'c, R> {
    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn base_columns(&self) -> &'c [BaseColumn<R>] {
        self.base
    }

    pub fn dynamic(&self) -> &DynamicColumns {
        &self.dynamic
    }

    pub fn is_filtered(&self) -> bool {
        matches!(self.dynamic, DynamicColumns::FilteredTotals { .. })
    }

    /// Total column count.
    pub fn len(&self) -> usize {
        self.header.len()
    }

    pub fn is_empty(&self) -> bool {
        self.header.is_empty()
    }

    /// Header index of the pivot column for `item_name`, matched case-insensitively.
    pub fn item_column(&self, item_name: &str) -> Option<usize> {
        self.item_index.get(&fold_name(item_name)).copied()
    }
}

/// Compose base columns with the item columns, or with the filtered totals
/// pair when a filter target is given.
///
/// An empty `item_names` is fine; the header is then the base columns alone.
pub fn build_plan<'c, R>(
    base: &'c [BaseColumn<R>],
    item_names: Vec<String>,
    filter: Option<&FilterTarget>,
) -> Result<ColumnPlan<'c, R>> {
    let mut header: Vec<String> = Vec::with_capacity(base.len() + item_names.len());
    for column in base {
        if header.iter().any(|name| name == column.name) {
            return Err(ExportError::DuplicateColumn {
                name: column.name.to_string(),
            });
        }
        header.push(column.name.to_string());
    }

    let mut item_index = HashMap::new();
    let dynamic = match filter {
        Some(target) => {
            header.push(format!("Total Number of {}", target.name));
            header.push(format!("Total Value of {}", target.name));
            DynamicColumns::FilteredTotals {
                name: target.name.clone(),
            }
        }
        None => {
            for name in &item_names {
                let index = header.len();
                if item_index.insert(fold_name(name), index).is_some() {
                    return Err(ExportError::DuplicateColumn { name: name.clone() });
                }
                header.push(name.clone());
            }
            DynamicColumns::Items(item_names)
        }
    };

    debug!(
        base_columns = base.len(),
        dynamic_columns = dynamic.len(),
        filtered = filter.is_some(),
        "column plan built"
    );

    Ok(ColumnPlan {
        base,
        dynamic,
        header,
        item_index,
    })
}
