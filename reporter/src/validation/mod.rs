//! Record validation.
//!
//! Turns one raw CSV row into an [`EmployeeRecord`] or reports the first
//! field that fails. Checks run in a fixed order: the string fields
//! (`name`, `position`, `skills`, `team`), then `completed_tasks`,
//! `performance` and `experience_years`.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use staff_reporter::validation::{validate_row, ValidationRules};
//!
//! let row: HashMap<String, String> = [
//!     ("name", "Alice"),
//!     ("position", "Backend Developer"),
//!     ("completed_tasks", "42"),
//!     ("performance", "4.8"),
//!     ("skills", "Python, Django"),
//!     ("team", "API"),
//!     ("experience_years", "5"),
//! ]
//! .into_iter()
//! .map(|(k, v)| (k.to_string(), v.to_string()))
//! .collect();
//!
//! let record = validate_row(&row, &ValidationRules::default()).unwrap();
//! assert_eq!(record.completed_tasks, 42);
//! assert_eq!(record.performance, 4.8);
//! ```

use crate::error::{FieldError, FieldResult};
use crate::models::{EmployeeRecord, REQUIRED_COLUMNS};
use crate::parser::RawRow;

/// Externally configured bounds for numeric fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationRules {
    /// Inclusive lower bound for `performance`.
    pub min_performance: f64,
    /// Inclusive upper bound for `performance`.
    pub max_performance: f64,
    /// Inclusive lower bound for `experience_years`.
    pub min_experience_years: i64,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_performance: 0.0,
            max_performance: 5.0,
            min_experience_years: 0,
        }
    }
}

/// Required columns absent from `headers`, in canonical order.
pub fn missing_columns<S: AsRef<str>>(headers: &[S]) -> Vec<String> {
    REQUIRED_COLUMNS
        .iter()
        .filter(|required| !headers.iter().any(|h| h.as_ref() == **required))
        .map(|c| c.to_string())
        .collect()
}

/// Validate and convert one raw row.
pub fn validate_row(row: &RawRow, rules: &ValidationRules) -> FieldResult<EmployeeRecord> {
    let name = required_text(row, "name")?;
    let position = required_text(row, "position")?;
    let skills = required_text(row, "skills")?;
    let team = required_text(row, "team")?;

    let completed_tasks = parse_int(row, "completed_tasks")?;
    if completed_tasks < 0 {
        return Err(FieldError::Negative {
            field: "completed_tasks",
            value: completed_tasks,
        });
    }

    let performance = parse_float(row, "performance")?;
    if !(rules.min_performance..=rules.max_performance).contains(&performance) {
        return Err(FieldError::PerformanceOutOfRange {
            value: performance,
            min: rules.min_performance,
            max: rules.max_performance,
        });
    }

    let experience_years = parse_int(row, "experience_years")?;
    if experience_years < rules.min_experience_years {
        return Err(FieldError::ExperienceBelowMinimum {
            value: experience_years,
            min: rules.min_experience_years,
        });
    }

    Ok(EmployeeRecord {
        name,
        position,
        completed_tasks: completed_tasks as u64,
        performance,
        skills,
        team,
        experience_years,
    })
}

fn raw<'a>(row: &'a RawRow, field: &str) -> &'a str {
    row.get(field).map(|v| v.trim()).unwrap_or("")
}

fn required_text(row: &RawRow, field: &'static str) -> FieldResult<String> {
    let value = raw(row, field);
    if value.is_empty() {
        return Err(FieldError::Empty { field });
    }
    Ok(value.to_string())
}

fn parse_int(row: &RawRow, field: &'static str) -> FieldResult<i64> {
    let value = raw(row, field);
    value.parse().map_err(|_| FieldError::NotAnInteger {
        field,
        raw: value.to_string(),
    })
}

fn parse_float(row: &RawRow, field: &'static str) -> FieldResult<f64> {
    let value = raw(row, field);
    value.parse().map_err(|_| FieldError::NotANumber {
        field,
        raw: value.to_string(),
    })
}
