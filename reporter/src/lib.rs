//! # Staff Reporter - employee performance and skills reports
//!
//! Staff Reporter reads employee CSV exports, validates every row and renders
//! one of two plain-text reports: average performance per position, or skill
//! popularity with a ranking of employees by skill count.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  CSV files  │────▶│   Loader    │────▶│  Dispatcher │────▶│ Text table  │
//! │ (or folder) │     │ (validates) │     │ (aggregates)│     │  (rendered) │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use staff_reporter::{DataService, InputSelection, ReportService, Settings};
//!
//! fn main() -> Result<(), staff_reporter::AppError> {
//!     let settings = Settings::load(None)?;
//!     let records = DataService::from_settings(&settings)
//!         .load(&InputSelection::Files(vec!["employees.csv".into()]))?;
//!     let report = ReportService::from_settings(&settings).generate_report("performance", &records)?;
//!     println!("{}", report);
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - Domain models (EmployeeRecord, summaries)
//! - [`config`] - Typed settings from env file and environment
//! - [`parser`] - CSV reading into raw rows
//! - [`validation`] - Required columns and per-row checks
//! - [`loader`] - Multi-source loading and folder discovery
//! - [`report`] - Aggregation, dispatch and table rendering
//! - [`service`] - Application services used by the CLI
//! - [`logging`] - tracing subscriber setup

// Core modules
pub mod error;
pub mod models;

// Configuration
pub mod config;

// Ingestion
pub mod parser;
pub mod validation;
pub mod loader;

// Reports
pub mod report;

// Application layer
pub mod service;
pub mod logging;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{AppError, AppResult, ConfigError, FieldError, LoadError, ReportError};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{
    parse_skills,
    EmployeeRecord,
    EmployeeSkillsProfile,
    PositionSummary,
    SkillSummary,
    REQUIRED_COLUMNS,
};

// =============================================================================
// Re-exports - Configuration
// =============================================================================

pub use config::{SettingKind, Settings};

// =============================================================================
// Re-exports - Loading
// =============================================================================

pub use loader::{discover_csv_files, CsvLoader, DataLoader};
pub use validation::{validate_row, ValidationRules};

// =============================================================================
// Re-exports - Reports
// =============================================================================

pub use report::{
    render_table,
    Cell,
    PerformanceReport,
    Report,
    ReportDispatcher,
    ReportGenerator,
    SkillsReport,
    TableFormat,
    REPORT_TYPES,
};

// =============================================================================
// Re-exports - Services
// =============================================================================

pub use service::{DataService, InputSelection, ReportService};
