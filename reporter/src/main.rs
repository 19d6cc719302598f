//! Staff report CLI - render employee reports from CSV exports
//!
//! # Usage
//!
//! ```bash
//! staff-report --files a.csv b.csv --report performance
//! staff-report --folder data/ --report skills
//! staff-report --show-config              # Print resolved settings as JSON
//! ```
//!
//! Exit codes: `0` success, `1` load or validation failure, `2` usage error
//! or unsupported report type.

use clap::builder::PossibleValuesParser;
use clap::Parser;
use staff_reporter::{
    logging, AppError, AppResult, DataService, InputSelection, ReportError, ReportService,
    Settings, REPORT_TYPES,
};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "staff-report")]
#[command(about = "Build performance and skills reports from employee CSV files", long_about = None)]
struct Cli {
    /// CSV files to load, in order
    #[arg(long, num_args = 1.., value_name = "PATH", conflicts_with = "folder")]
    files: Vec<PathBuf>,

    /// Folder searched for CSV files
    #[arg(long, value_name = "PATH")]
    folder: Option<PathBuf>,

    /// Report to generate (default: DEFAULT_REPORT_TYPE)
    #[arg(long, value_parser = PossibleValuesParser::new(REPORT_TYPES))]
    report: Option<String>,

    /// Env file with settings (default: .env if present)
    #[arg(long, value_name = "PATH")]
    env_file: Option<PathBuf>,

    /// Print the resolved settings and exit
    #[arg(long)]
    show_config: bool,
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> AppResult<String> {
    // RUST_LOG may come from the env file.
    Settings::load_env_file(cli.env_file.as_deref())?;
    logging::init();
    let settings = Settings::from_env()?;
    debug!(?settings, "settings resolved");

    if cli.show_config {
        return serde_json::to_string_pretty(&settings)
            .map_err(|e| AppError::Usage(format!("cannot serialize settings: {}", e)));
    }

    let report_type = resolve_report_type(cli.report, &settings)?;
    let input = InputSelection::resolve(cli.files, cli.folder, &settings)?;

    let records = DataService::from_settings(&settings).load(&input)?;
    let output = ReportService::from_settings(&settings).generate_report(&report_type, &records)?;
    Ok(output)
}

/// The `--report` value, else `DEFAULT_REPORT_TYPE`, checked before any file is read.
fn resolve_report_type(requested: Option<String>, settings: &Settings) -> AppResult<String> {
    let report_type = requested
        .or_else(|| settings.default_report_type.clone())
        .ok_or_else(|| AppError::Usage("no report selected: pass --report".into()))?;

    if !REPORT_TYPES.contains(&report_type.as_str()) {
        return Err(ReportError::UnsupportedReportType {
            requested: report_type,
            available: REPORT_TYPES.join(", "),
        }
        .into());
    }
    Ok(report_type)
}
