//! Report selection and generation.
//!
//! A fixed registry maps report identifiers to [`Report`] implementations:
//!
//! - `performance` - [`performance::PerformanceReport`]
//! - `skills` - [`skills::SkillsReport`]
//!
//! # Example
//!
//! ```
//! use staff_reporter::config::Settings;
//! use staff_reporter::report::{ReportDispatcher, ReportGenerator};
//!
//! let dispatcher = ReportDispatcher::from_settings(&Settings::default());
//! let output = dispatcher.generate_report("performance", &[]).unwrap();
//! assert!(output.contains("Position"));
//! assert!(dispatcher.generate_report("payroll", &[]).is_err());
//! ```

pub mod performance;
pub mod skills;
pub mod table;

use tracing::info;

use crate::config::Settings;
use crate::error::{ReportError, ReportResult};
use crate::models::EmployeeRecord;

pub use performance::PerformanceReport;
pub use skills::SkillsReport;
pub use table::{render_table, Cell, TableFormat};

/// Registered report identifiers, in registry order.
pub const REPORT_TYPES: [&str; 2] = ["performance", "skills"];

/// One kind of report over the full record collection.
pub trait Report {
    /// Registry identifier.
    fn name(&self) -> &'static str;

    /// Render the report. An empty collection yields a headers-only or
    /// placeholder report.
    fn generate(&self, records: &[EmployeeRecord]) -> String;
}

/// Produces a report by identifier.
pub trait ReportGenerator {
    fn generate_report(&self, report_type: &str, records: &[EmployeeRecord]) -> ReportResult<String>;
}

/// Looks up report identifiers in a fixed registry.
pub struct ReportDispatcher {
    reports: Vec<Box<dyn Report>>,
}

impl ReportDispatcher {
    pub fn from_settings(settings: &Settings) -> Self {
        let reports: Vec<Box<dyn Report>> = vec![
            Box::new(PerformanceReport::from_settings(settings)),
            Box::new(SkillsReport::from_settings(settings)),
        ];
        Self { reports }
    }

    /// Identifiers of the registered reports.
    pub fn available(&self) -> Vec<&'static str> {
        self.reports.iter().map(|r| r.name()).collect()
    }

    fn lookup(&self, report_type: &str) -> ReportResult<&dyn Report> {
        self.reports
            .iter()
            .find(|r| r.name() == report_type)
            .map(|r| &**r)
            .ok_or_else(|| ReportError::UnsupportedReportType {
                requested: report_type.to_string(),
                available: self.available().join(", "),
            })
    }
}

impl ReportGenerator for ReportDispatcher {
    fn generate_report(&self, report_type: &str, records: &[EmployeeRecord]) -> ReportResult<String> {
        let report = self.lookup(report_type)?;
        info!(report = report_type, records = records.len(), "generating report");
        Ok(report.generate(records))
    }
}
