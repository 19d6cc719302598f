//! Application services.
//!
//! [`DataService`] and [`ReportService`] sit between the CLI and the
//! interchangeable [`DataLoader`] / [`ReportGenerator`] implementations.
//!
//! # Example
//!
//! ```rust,no_run
//! use staff_reporter::config::Settings;
//! use staff_reporter::service::{DataService, InputSelection, ReportService};
//!
//! let settings = Settings::from_env()?;
//! let data = DataService::from_settings(&settings);
//! let reports = ReportService::from_settings(&settings);
//!
//! let records = data.load(&InputSelection::Folder("data".into()))?;
//! println!("{}", reports.generate_report("performance", &records)?);
//! # Ok::<(), staff_reporter::AppError>(())
//! ```

use std::path::PathBuf;

use crate::config::Settings;
use crate::error::{AppError, AppResult, LoadResult, ReportError, ReportResult};
use crate::loader::{CsvLoader, DataLoader};
use crate::models::EmployeeRecord;
use crate::report::{ReportDispatcher, ReportGenerator};

/// Where records come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSelection {
    /// Explicit CSV files, loaded in the given order.
    Files(Vec<PathBuf>),
    /// A folder searched for CSV files.
    Folder(PathBuf),
}

impl InputSelection {
    /// Resolve CLI inputs, falling back to the configured folder.
    pub fn resolve(
        files: Vec<PathBuf>,
        folder: Option<PathBuf>,
        settings: &Settings,
    ) -> AppResult<Self> {
        match (files.is_empty(), folder) {
            (false, None) => Ok(InputSelection::Files(files)),
            (true, Some(folder)) => Ok(InputSelection::Folder(folder)),
            (false, Some(_)) => Err(AppError::Usage(
                "--files and --folder cannot be used together".into(),
            )),
            (true, None) => match (&settings.csv_folder_path, settings.auto_discover_folder) {
                (Some(folder), true) => Ok(InputSelection::Folder(folder.clone())),
                _ => Err(AppError::Usage(
                    "no input given: pass --files or --folder".into(),
                )),
            },
        }
    }
}

/// Loads records through a [`DataLoader`].
pub struct DataService<L = CsvLoader> {
    loader: L,
}

impl DataService<CsvLoader> {
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(CsvLoader::new(settings.validation_rules()).recursive(settings.include_subfolders))
    }
}

impl<L: DataLoader> DataService<L> {
    pub fn new(loader: L) -> Self {
        Self { loader }
    }

    pub fn load(&self, input: &InputSelection) -> LoadResult<Vec<EmployeeRecord>> {
        match input {
            InputSelection::Files(paths) => self.loader.load_from_files(paths),
            InputSelection::Folder(folder) => self.loader.load_from_folder(folder),
        }
    }
}

/// Generates reports through a [`ReportGenerator`], refusing empty input.
pub struct ReportService<G = ReportDispatcher> {
    generator: G,
}

impl ReportService<ReportDispatcher> {
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(ReportDispatcher::from_settings(settings))
    }
}

impl<G: ReportGenerator> ReportService<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub fn generate_report(&self, report_type: &str, records: &[EmployeeRecord]) -> ReportResult<String> {
        if records.is_empty() {
            return Err(ReportError::EmptyDataset);
        }
        self.generator.generate_report(report_type, records)
    }
}
