//! Inventory CSV export CLI.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use stock_cli::commands::{run_export, run_items};
use stock_cli::logging::{LogConfig, LogFormat, init_logging};
use stock_cli::types::ExportOutcome;
use stock_model::ReportKind;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod summary;

use crate::cli::{Cli, Command};
use crate::summary::{print_items, print_summary};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli.command) {
        Ok(Some(outcome)) => {
            print_summary(&outcome);
            0
        }
        Ok(None) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Run one subcommand; exports return an outcome for the summary table.
fn run(command: &Command) -> Result<Option<ExportOutcome>> {
    let outcome = match command {
        Command::Donations(args) => run_export(
            &args.snapshot,
            &args.request(ReportKind::Donations),
            args.output.as_deref(),
        )?,
        Command::Distributions(args) => run_export(
            &args.export.snapshot,
            &args.request(),
            args.export.output.as_deref(),
        )?,
        Command::ProductDrives(args) => run_export(
            &args.export.snapshot,
            &args.request()?,
            args.export.output.as_deref(),
        )?,
        Command::Items(args) => {
            print_items(&run_items(&args.snapshot)?);
            return Ok(None);
        }
    };
    Ok(Some(outcome))
}

/// `--log-level` wins over `-v`/`-q`; `RUST_LOG` applies only when neither is given.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let explicit = cli.verbosity.is_present() || cli.log_level.is_some();
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig {
        level_filter: cli
            .log_level
            .map_or_else(|| cli.verbosity.tracing_level_filter(), LevelFilter::from),
        use_env_filter: !explicit,
        format: LogFormat::from(cli.log_format),
        log_file: cli.log_file.clone(),
        with_ansi,
        ..LogConfig::default()
    }
}
