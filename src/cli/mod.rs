//! Command-line front end: loads a scenario file and prints projections.

pub mod output;
pub mod style;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::{
    config::ConfigManager,
    domain::month::parse_month_id,
    errors::ProjectionError,
    projection::ProjectionRequest,
    services::{Clock, FixedClock, ProjectionService, SystemClock},
    storage::load_scenario_from_path,
    utils::{build_info, init_tracing},
};

use self::{
    output::{render_report, render_summary},
    style::UiStyle,
};

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] ProjectionError),
    #[error("Invalid input: {0}")]
    Input(String),
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Core(ProjectionError::from(err))
    }
}

#[derive(Parser, Debug)]
#[command(name = "projection_core_cli", version, about = "Projects how monthly surplus funds savings goals", long_about = None)]
pub struct Cli {
    /// Configuration file to use instead of the platform default.
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Month-by-month goal projection for a scenario file.
    Project {
        scenario: PathBuf,
        /// First month to display, relative to the current month.
        #[arg(long)]
        offset: Option<u32>,
        /// Number of months to display (at most 24).
        #[arg(long)]
        months: Option<u32>,
        /// Treat this month (YYYY-MM or YYYY-MM-DD) as the current month.
        #[arg(long, value_name = "MONTH")]
        as_of: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Current month's income, expenses, and surplus.
    Summary {
        scenario: PathBuf,
        #[arg(long, value_name = "MONTH")]
        as_of: Option<String>,
        #[arg(long)]
        json: bool,
    },
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    Version,
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    Show,
    Path,
}

/// Parses process arguments and runs the selected command.
pub fn run_cli() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let output = execute(cli)?;
    print!("{output}");
    Ok(())
}

/// Runs a parsed command and returns what it would print.
pub fn execute(cli: Cli) -> Result<String, CliError> {
    let manager = cli
        .config
        .map(ConfigManager::with_path)
        .unwrap_or_default();
    let config = manager.load()?;

    match cli.command {
        Commands::Project {
            scenario,
            offset,
            months,
            as_of,
            json,
        } => {
            let source = load_scenario_from_path(&scenario)?;
            let clock = resolve_clock(as_of.as_deref())?;
            let request = ProjectionRequest::from_config(&config, offset, months);
            let report = ProjectionService::project(&source, clock.as_ref(), request)?;
            if json {
                Ok(format!("{}\n", serde_json::to_string_pretty(&report)?))
            } else {
                Ok(render_report(&report, &config.currency, &UiStyle::detect(&config)))
            }
        }
        Commands::Summary {
            scenario,
            as_of,
            json,
        } => {
            let source = load_scenario_from_path(&scenario)?;
            let clock = resolve_clock(as_of.as_deref())?;
            let summary = ProjectionService::summarize(&source, clock.as_ref())?;
            if json {
                Ok(format!("{}\n", serde_json::to_string_pretty(&summary)?))
            } else {
                Ok(render_summary(&summary, &config.currency, &UiStyle::detect(&config)))
            }
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => Ok(format!("{}\n", serde_json::to_string_pretty(&config)?)),
            ConfigAction::Path => Ok(format!("{}\n", manager.path().display())),
        },
        Commands::Version => Ok(format!("{}\n", build_info::current())),
    }
}

fn resolve_clock(as_of: Option<&str>) -> Result<Box<dyn Clock>, CliError> {
    match as_of {
        None => Ok(Box::new(SystemClock)),
        Some(raw) => parse_as_of(raw)
            .map(|date| Box::new(FixedClock::new(date)) as Box<dyn Clock>)
            .ok_or_else(|| CliError::Input(format!("`{raw}` is not a YYYY-MM month"))),
    }
}

fn parse_as_of(raw: &str) -> Option<NaiveDate> {
    parse_month_id(raw).or_else(|| NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok())
}
