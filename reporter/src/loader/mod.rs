//! Dataset loading.
//!
//! Reads one or more CSV sources, enforces the required columns per source
//! and validates every row, concatenating the records in source order.
//! The first failure abandons the whole batch.
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ paths/folder │────▶│  discovery   │────▶│ header check │────▶│ row checks   │──▶ Vec<EmployeeRecord>
//! └──────────────┘     └──────────────┘     └──────────────┘     └──────────────┘
//! ```

pub mod discover;

use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{LoadError, LoadResult};
use crate::models::EmployeeRecord;
use crate::parser;
use crate::validation::{missing_columns, validate_row, ValidationRules};

pub use discover::{discover_csv_files, has_csv_extension};

/// A source of employee records.
pub trait DataLoader {
    /// Load and concatenate records from explicit files.
    fn load_from_files(&self, paths: &[PathBuf]) -> LoadResult<Vec<EmployeeRecord>>;

    /// Discover files under a folder and load them.
    fn load_from_folder(&self, folder: &Path) -> LoadResult<Vec<EmployeeRecord>>;
}

/// Loads employee records from CSV files.
#[derive(Debug, Clone)]
pub struct CsvLoader {
    rules: ValidationRules,
    recursive: bool,
}

impl CsvLoader {
    pub fn new(rules: ValidationRules) -> Self {
        Self {
            rules,
            recursive: true,
        }
    }

    /// Whether folder discovery descends into subfolders.
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Discover CSV files, failing when none are found.
    pub fn discover(&self, folder: &Path) -> LoadResult<Vec<PathBuf>> {
        let files = discover_csv_files(folder, self.recursive)?;
        if files.is_empty() {
            return Err(LoadError::DiscoveryEmpty {
                path: folder.to_path_buf(),
            });
        }
        Ok(files)
    }

    /// Load every file in order, failing fast.
    pub fn load_paths(&self, paths: &[PathBuf]) -> LoadResult<Vec<EmployeeRecord>> {
        let mut records = Vec::new();
        for path in paths {
            let loaded = self.load_file(path)?;
            debug!(path = %path.display(), rows = loaded.len(), "loaded source");
            records.extend(loaded);
        }
        info!(sources = paths.len(), records = records.len(), "dataset loaded");
        Ok(records)
    }

    /// Load a single CSV file.
    pub fn load_file(&self, path: &Path) -> LoadResult<Vec<EmployeeRecord>> {
        if !path.exists() {
            return Err(LoadError::SourceNotFound {
                path: path.to_path_buf(),
            });
        }

        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut reader = parser::reader(file);

        let headers = parser::read_headers(&mut reader, path)?;
        let missing = missing_columns(&headers);
        if !missing.is_empty() {
            return Err(LoadError::SchemaInvalid {
                path: path.to_path_buf(),
                missing,
            });
        }

        let mut records = Vec::new();
        for (index, row) in parser::rows(&mut reader, &headers, path).enumerate() {
            let row = row?;
            let record = validate_row(&row, &self.rules).map_err(|source| LoadError::FieldInvalid {
                path: path.to_path_buf(),
                row: index + 1,
                source,
            })?;
            records.push(record);
        }
        Ok(records)
    }

    fn check_explicit_file(path: &Path) -> LoadResult<()> {
        if !path.exists() {
            return Err(LoadError::SourceNotFound {
                path: path.to_path_buf(),
            });
        }
        if !path.is_file() {
            return Err(LoadError::SourceInvalid {
                path: path.to_path_buf(),
                reason: "not a file".into(),
            });
        }
        if !has_csv_extension(path) {
            return Err(LoadError::SourceInvalid {
                path: path.to_path_buf(),
                reason: "expected a .csv file".into(),
            });
        }
        Ok(())
    }
}

impl DataLoader for CsvLoader {
    fn load_from_files(&self, paths: &[PathBuf]) -> LoadResult<Vec<EmployeeRecord>> {
        for path in paths {
            Self::check_explicit_file(path)?;
        }
        self.load_paths(paths)
    }

    fn load_from_folder(&self, folder: &Path) -> LoadResult<Vec<EmployeeRecord>> {
        let files = self.discover(folder)?;
        self.load_paths(&files)
    }
}
