//! CSV output for inventory export tables.

pub mod csv;
pub mod error;
pub mod format;

pub use crate::csv::{encode_csv, write_csv, write_csv_file};
pub use error::{OutputError, Result};
pub use format::{currency, float_like, render_cell};
