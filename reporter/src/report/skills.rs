//! Skills distribution and ranking.
//!
//! Two views over the tokenized `skills` field:
//!
//! - **distribution**: per skill, how many employees hold it and their
//!   average performance, limited to skills held by at least
//!   `min_occurrence` employees, most popular first;
//! - **ranking**: employees ordered by how many skills they list.
//!
//! Both views show at most [`TOP_N`] rows.

use std::collections::HashMap;

use super::table::{render_table, Cell, TableFormat};
use super::Report;
use crate::config::Settings;
use crate::models::{round2, EmployeeRecord, EmployeeSkillsProfile, SkillSummary};

/// Rows shown per view.
pub const TOP_N: usize = 10;

/// Holder names listed per skill before collapsing the rest.
pub const MAX_LISTED_HOLDERS: usize = 3;

pub const BANNER: &str = "=== EMPLOYEE SKILLS REPORT ===";
pub const NO_DATA: &str = "No data available for skills analysis";
pub const NO_SKILLS: &str = "No skills found";

pub const DISTRIBUTION_HEADERS: [&str; 5] = ["#", "Skill", "Employees", "Avg performance", "Holders"];
pub const RANKING_HEADERS: [&str; 6] = ["#", "Name", "Position", "Skills", "Performance", "Skill list"];

// =============================================================================
// Distribution
// =============================================================================

#[derive(Default)]
struct SkillStats {
    names: Vec<String>,
    total: f64,
}

/// Skills held by at least `min_occurrence` employees, most popular first.
///
/// A skill repeated within one record counts once for that record. Ties keep
/// the order in which skills were first seen.
pub fn skill_distribution(profiles: &[EmployeeSkillsProfile], min_occurrence: usize) -> Vec<SkillSummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut stats: Vec<(&str, SkillStats)> = Vec::new();

    for profile in profiles {
        let mut seen: Vec<&str> = Vec::new();
        for skill in &profile.skills {
            if seen.contains(&skill.as_str()) {
                continue;
            }
            seen.push(skill);

            let slot = *index.entry(skill.as_str()).or_insert_with(|| {
                stats.push((skill.as_str(), SkillStats::default()));
                stats.len() - 1
            });
            let entry = &mut stats[slot].1;
            entry.names.push(profile.name.clone());
            entry.total += profile.performance;
        }
    }

    let mut summaries: Vec<SkillSummary> = stats
        .into_iter()
        .filter(|(_, s)| s.names.len() >= min_occurrence)
        .map(|(skill, s)| SkillSummary {
            skill: skill.to_string(),
            employee_count: s.names.len(),
            avg_performance: round2(s.total / s.names.len() as f64),
            employee_names: s.names,
        })
        .collect();

    summaries.sort_by(|a, b| b.employee_count.cmp(&a.employee_count));
    summaries
}

/// Employees ordered by skill count, most first. Ties keep input order.
pub fn rank_by_skill_count(profiles: &[EmployeeSkillsProfile]) -> Vec<EmployeeSkillsProfile> {
    let mut ranked = profiles.to_vec();
    ranked.sort_by(|a, b| b.skills_count().cmp(&a.skills_count()));
    ranked
}

/// First holders joined, with a count of the rest.
///
/// ```
/// use staff_reporter::report::skills::holders_label;
///
/// let names: Vec<String> = ["A", "B", "C", "D", "E"].iter().map(|s| s.to_string()).collect();
/// assert_eq!(holders_label(&names), "A, B, C and 2 more");
/// ```
pub fn holders_label(names: &[String]) -> String {
    let shown = names.iter().take(MAX_LISTED_HOLDERS).cloned().collect::<Vec<_>>().join(", ");
    match names.len().saturating_sub(MAX_LISTED_HOLDERS) {
        0 => shown,
        rest => format!("{} and {} more", shown, rest),
    }
}

fn render_distribution(summaries: &[SkillSummary], format: TableFormat) -> String {
    if summaries.is_empty() {
        return NO_SKILLS.to_string();
    }
    let rows: Vec<Vec<Cell>> = summaries
        .iter()
        .take(TOP_N)
        .enumerate()
        .map(|(i, s)| {
            vec![
                Cell::from(i + 1),
                Cell::from(s.skill.as_str()),
                Cell::from(s.employee_count),
                Cell::from(s.avg_performance),
                Cell::from(holders_label(&s.employee_names)),
            ]
        })
        .collect();
    render_table(&DISTRIBUTION_HEADERS, &rows, format)
}

fn render_ranking(ranked: &[EmployeeSkillsProfile], format: TableFormat) -> String {
    let rows: Vec<Vec<Cell>> = ranked
        .iter()
        .take(TOP_N)
        .enumerate()
        .map(|(i, p)| {
            vec![
                Cell::from(i + 1),
                Cell::from(p.name.as_str()),
                Cell::from(p.position.as_str()),
                Cell::from(p.skills_count()),
                Cell::from(p.performance),
                Cell::from(p.skills.join(", ")),
            ]
        })
        .collect();
    render_table(&RANKING_HEADERS, &rows, format)
}

// =============================================================================
// Report
// =============================================================================

/// Skills popularity and per-employee skill counts.
#[derive(Debug, Clone)]
pub struct SkillsReport {
    min_occurrence: usize,
    format: TableFormat,
}

impl SkillsReport {
    pub fn new(min_occurrence: usize, format: TableFormat) -> Self {
        Self {
            min_occurrence,
            format,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.skills_min_occurrence, settings.table_format)
    }
}

impl Report for SkillsReport {
    fn name(&self) -> &'static str {
        "skills"
    }

    fn generate(&self, records: &[EmployeeRecord]) -> String {
        if records.is_empty() {
            return NO_DATA.to_string();
        }

        let profiles: Vec<EmployeeSkillsProfile> =
            records.iter().map(EmployeeSkillsProfile::from_record).collect();
        let distribution = skill_distribution(&profiles, self.min_occurrence);
        let ranked = rank_by_skill_count(&profiles);

        [
            BANNER.to_string(),
            render_distribution(&distribution, self.format),
            render_ranking(&ranked, self.format),
        ]
        .join("\n\n")
    }
}
