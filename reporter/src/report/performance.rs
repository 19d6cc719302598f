//! Performance by position.
//!
//! Groups records by `position` in discovery order, averages `performance`
//! per group and optionally sorts the groups by that average.
//!
//! ```text
//! Records                               →  Summaries
//! ┌──────────────────────────────────┐     ┌──────────────────────────────┐
//! │ Alice, Backend Developer, 4.8    │     │ Backend Developer  4.75  (2) │
//! │ Bob,   Frontend Developer, 4.5   │ →   │ Frontend Developer 4.5   (1) │
//! │ Carol, Backend Developer, 4.7    │     └──────────────────────────────┘
//! └──────────────────────────────────┘
//! ```

use std::collections::HashMap;

use super::table::{render_table, Cell, TableFormat};
use super::Report;
use crate::config::Settings;
use crate::models::{round2, EmployeeRecord, PositionSummary};

/// Column headers of the performance table.
pub const HEADERS: [&str; 4] = ["#", "Position", "Avg performance", "Employees"];

/// Ordering applied to position summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Keep first-seen order of positions.
    Discovery,
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn from_settings(settings: &Settings) -> Self {
        match (settings.sort_by_performance, settings.sort_descending()) {
            (false, _) => SortOrder::Discovery,
            (true, true) => SortOrder::Descending,
            (true, false) => SortOrder::Ascending,
        }
    }
}

/// Group records by position, preserving first-seen order.
pub fn summarize_positions(records: &[EmployeeRecord]) -> Vec<PositionSummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<PositionBuilder> = Vec::new();

    for record in records {
        let slot = *index.entry(record.position.as_str()).or_insert_with(|| {
            groups.push(PositionBuilder::new(&record.position));
            groups.len() - 1
        });
        groups[slot].add(record);
    }

    groups.into_iter().map(PositionBuilder::build).collect()
}

/// Sort summaries by average performance. Ties keep their relative order.
pub fn sort_summaries(summaries: &mut [PositionSummary], order: SortOrder) {
    match order {
        SortOrder::Discovery => {}
        SortOrder::Ascending => {
            summaries.sort_by(|a, b| a.avg_performance.total_cmp(&b.avg_performance))
        }
        SortOrder::Descending => {
            summaries.sort_by(|a, b| b.avg_performance.total_cmp(&a.avg_performance))
        }
    }
}

/// Accumulates one position group.
struct PositionBuilder {
    position: String,
    total: f64,
    names: Vec<String>,
}

impl PositionBuilder {
    fn new(position: &str) -> Self {
        Self {
            position: position.to_string(),
            total: 0.0,
            names: Vec::new(),
        }
    }

    fn add(&mut self, record: &EmployeeRecord) {
        self.total += record.performance;
        self.names.push(record.name.clone());
    }

    fn build(self) -> PositionSummary {
        let count = self.names.len();
        PositionSummary {
            position: self.position,
            avg_performance: round2(self.total / count as f64),
            employee_count: count,
            employee_names: self.names,
        }
    }
}

/// Render summaries as a table.
pub fn render_positions(summaries: &[PositionSummary], format: TableFormat) -> String {
    let rows: Vec<Vec<Cell>> = summaries
        .iter()
        .enumerate()
        .map(|(i, s)| {
            vec![
                Cell::from(i + 1),
                Cell::from(format!("{}\n({})", s.position, s.employee_names.join(", "))),
                Cell::from(s.avg_performance),
                Cell::from(s.employee_count),
            ]
        })
        .collect();
    render_table(&HEADERS, &rows, format)
}

/// Average performance per position.
#[derive(Debug, Clone)]
pub struct PerformanceReport {
    order: SortOrder,
    format: TableFormat,
}

impl PerformanceReport {
    pub fn new(order: SortOrder, format: TableFormat) -> Self {
        Self { order, format }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(SortOrder::from_settings(settings), settings.table_format)
    }

    /// Grouped and ordered summaries.
    pub fn summaries(&self, records: &[EmployeeRecord]) -> Vec<PositionSummary> {
        let mut summaries = summarize_positions(records);
        sort_summaries(&mut summaries, self.order);
        summaries
    }
}

impl Report for PerformanceReport {
    fn name(&self) -> &'static str {
        "performance"
    }

    fn generate(&self, records: &[EmployeeRecord]) -> String {
        render_positions(&self.summaries(records), self.format)
    }
}
