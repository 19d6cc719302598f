//! Error types for the staff reporting pipeline.
//!
//! The hierarchy mirrors the pipeline stages:
//!
//! - [`FieldError`] - a single field of a row failed validation
//! - [`LoadError`] - locating, reading or validating a CSV source
//! - [`ReportError`] - selecting or generating a report
//! - [`ConfigError`] - building [`crate::config::Settings`]
//! - [`AppError`] - top-level errors surfaced by the CLI
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Field Errors
// =============================================================================

/// A single field of a raw row failed its check.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    /// String field is empty after trimming.
    #[error("empty value in field `{field}`")]
    Empty { field: &'static str },

    /// Integer field could not be parsed.
    #[error("invalid value for `{field}`: '{raw}' is not an integer")]
    NotAnInteger { field: &'static str, raw: String },

    /// Integer field must not be negative.
    #[error("invalid value for `{field}`: {value} must be non-negative")]
    Negative { field: &'static str, value: i64 },

    /// Float field could not be parsed.
    #[error("invalid value for `{field}`: '{raw}' is not a number")]
    NotANumber { field: &'static str, raw: String },

    /// Performance outside the configured inclusive range.
    #[error("invalid value for `performance`: {value} must be between {min} and {max}")]
    PerformanceOutOfRange { value: f64, min: f64, max: f64 },

    /// Experience below the configured minimum.
    #[error("invalid value for `experience_years`: {value} must be at least {min}")]
    ExperienceBelowMinimum { value: i64, min: i64 },
}

impl FieldError {
    /// Name of the column that failed.
    pub fn field(&self) -> &'static str {
        match self {
            FieldError::Empty { field }
            | FieldError::NotAnInteger { field, .. }
            | FieldError::Negative { field, .. }
            | FieldError::NotANumber { field, .. } => field,
            FieldError::PerformanceOutOfRange { .. } => "performance",
            FieldError::ExperienceBelowMinimum { .. } => "experience_years",
        }
    }
}

// =============================================================================
// Load Errors
// =============================================================================

/// Errors while locating, reading and validating CSV sources.
///
/// Any of these aborts the whole batch: no partial dataset is returned.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File or directory does not exist.
    #[error("source not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    /// Path exists but cannot be used as a source.
    #[error("invalid source {}: {reason}", path.display())]
    SourceInvalid { path: PathBuf, reason: String },

    /// Header is missing required columns.
    #[error("{} is missing required columns: {}", path.display(), missing.join(", "))]
    SchemaInvalid { path: PathBuf, missing: Vec<String> },

    /// A data row failed validation.
    #[error("row {row} of {}: {source}", path.display())]
    FieldInvalid {
        path: PathBuf,
        row: usize,
        #[source]
        source: FieldError,
    },

    /// Discovery found no CSV files.
    #[error("no matching files found in {}", path.display())]
    DiscoveryEmpty { path: PathBuf },

    /// Failed to open or walk a path.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader rejected the content.
    #[error("malformed CSV in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

// =============================================================================
// Report Errors
// =============================================================================

/// Errors while selecting or generating a report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReportError {
    /// Report identifier is not registered.
    #[error("unsupported report type '{requested}' (available: {available})")]
    UnsupportedReportType { requested: String, available: String },

    /// A report was requested with no records.
    #[error("no data to generate a report from")]
    EmptyDataset,
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors while building the settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A setting could not be converted to its kind.
    #[error("invalid value for {key}: '{value}' is not a valid {expected}")]
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },

    /// Performance bounds are inverted.
    #[error("MIN_PERFORMANCE ({min}) is greater than MAX_PERFORMANCE ({max})")]
    InvalidPerformanceRange { min: f64, max: f64 },

    /// Requested env file could not be loaded.
    #[error("cannot load env file {}: {source}", path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

// =============================================================================
// Application Errors (top-level)
// =============================================================================

/// Top-level error returned to the CLI.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Loading error.
    #[error("{0}")]
    Load(#[from] LoadError),

    /// Report error.
    #[error("{0}")]
    Report(#[from] ReportError),

    /// Invalid command line usage.
    #[error("{0}")]
    Usage(String),
}

impl AppError {
    /// Process exit code for this error.
    ///
    /// `2` for usage and report selection errors, `1` for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Usage(_) => 2,
            AppError::Report(ReportError::UnsupportedReportType { .. }) => 2,
            _ => 1,
        }
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for field checks.
pub type FieldResult<T> = Result<T, FieldError>;

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Result type for report operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// Result type for configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for the application layer.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        let load_err = LoadError::SourceNotFound {
            path: PathBuf::from("missing.csv"),
        };
        let app_err: AppError = load_err.into();
        assert!(app_err.to_string().contains("missing.csv"));
        assert_eq!(app_err.exit_code(), 1);

        let report_err = ReportError::UnsupportedReportType {
            requested: "payroll".into(),
            available: "performance, skills".into(),
        };
        let app_err: AppError = report_err.into();
        assert!(app_err.to_string().contains("performance, skills"));
        assert_eq!(app_err.exit_code(), 2);
    }

    #[test]
    fn test_empty_dataset_exit_code() {
        let app_err: AppError = ReportError::EmptyDataset.into();
        assert_eq!(app_err.exit_code(), 1);
        assert_eq!(AppError::Usage("no input".into()).exit_code(), 2);
    }

    #[test]
    fn test_field_invalid_format() {
        let err = LoadError::FieldInvalid {
            path: PathBuf::from("team.csv"),
            row: 3,
            source: FieldError::Empty { field: "name" },
        };
        let msg = err.to_string();
        assert!(msg.contains("row 3"));
        assert!(msg.contains("team.csv"));
        assert!(msg.contains("empty value in field `name`"));
    }

    #[test]
    fn test_field_name_lookup() {
        let err = FieldError::PerformanceOutOfRange {
            value: 6.0,
            min: 0.0,
            max: 5.0,
        };
        assert_eq!(err.field(), "performance");
        assert!(err.to_string().contains("between 0 and 5"));

        let err = FieldError::NotAnInteger {
            field: "completed_tasks",
            raw: "ten".into(),
        };
        assert_eq!(err.field(), "completed_tasks");
    }

    #[test]
    fn test_schema_invalid_lists_columns() {
        let err = LoadError::SchemaInvalid {
            path: PathBuf::from("a.csv"),
            missing: vec!["team".into(), "skills".into()],
        };
        assert!(err.to_string().contains("team, skills"));
    }
}
