//! CLI argument definitions for the inventory exporter.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use stock_cli::logging::LogFormat;
use stock_model::{
    DateRange, ExportRequest, ItemCategoryId, ItemId, RecordId, ReportFilter, ReportKind,
};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "stock-export",
    version,
    about = "Export inventory records as pivoted CSV",
    long_about = "Export donations, distributions, or product drives from an inventory \
                  snapshot as CSV.\n\n\
                  Each row is one record; after the fixed columns comes one quantity \
                  column per catalog item, sorted case-insensitively."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Export donations with one column per item.
    Donations(ExportArgs),

    /// Export distributions, optionally filtered to one item or category.
    Distributions(DistributionArgs),

    /// Export product drives, optionally limited to a date range.
    ProductDrives(ProductDriveArgs),

    /// List the item columns an export of this snapshot would have.
    Items(ItemsArgs),
}

#[derive(Args)]
pub struct ExportArgs {
    /// Snapshot JSON file holding the organization and its records.
    #[arg(long = "snapshot", value_name = "PATH")]
    pub snapshot: PathBuf,

    /// Export only these record ids (repeatable; default: all).
    #[arg(long = "id", value_name = "ID")]
    pub ids: Vec<u64>,

    /// Write CSV here instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct DistributionArgs {
    #[command(flatten)]
    pub export: ExportArgs,

    /// Collapse item columns into totals for this item.
    #[arg(long = "item-id", value_name = "ID")]
    pub item_id: Option<u64>,

    /// Collapse item columns into totals for this item category.
    #[arg(long = "category-id", value_name = "ID")]
    pub category_id: Option<u64>,
}

#[derive(Args)]
pub struct ProductDriveArgs {
    #[command(flatten)]
    pub export: ExportArgs,

    /// First day counted toward quantities (YYYY-MM-DD).
    #[arg(long = "start", value_name = "DATE", requires = "end")]
    pub start: Option<NaiveDate>,

    /// Last day counted toward quantities (YYYY-MM-DD).
    #[arg(long = "end", value_name = "DATE", requires = "start")]
    pub end: Option<NaiveDate>,
}

#[derive(Args)]
pub struct ItemsArgs {
    /// Snapshot JSON file holding the organization catalog.
    #[arg(long = "snapshot", value_name = "PATH")]
    pub snapshot: PathBuf,
}

impl ExportArgs {
    fn record_ids(&self) -> Vec<RecordId> {
        self.ids.iter().copied().map(RecordId::from).collect()
    }

    pub fn request(&self, report: ReportKind) -> ExportRequest {
        ExportRequest::new(report).with_record_ids(self.record_ids())
    }
}

impl DistributionArgs {
    pub fn request(&self) -> ExportRequest {
        let filter = ReportFilter {
            by_item_id: self.item_id.map(ItemId::from),
            by_item_category_id: self.category_id.map(ItemCategoryId::from),
        };
        self.export
            .request(ReportKind::Distributions)
            .with_filter(filter)
    }
}

impl ProductDriveArgs {
    pub fn request(&self) -> stock_model::Result<ExportRequest> {
        let range = match (self.start, self.end) {
            (Some(start), Some(end)) => Some(DateRange::new(start, end)?),
            _ => None,
        };
        Ok(self
            .export
            .request(ReportKind::ProductDrives)
            .with_date_range(range))
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => Self::ERROR,
            LogLevelArg::Warn => Self::WARN,
            LogLevelArg::Info => Self::INFO,
            LogLevelArg::Debug => Self::DEBUG,
            LogLevelArg::Trace => Self::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}
