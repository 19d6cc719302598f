//! Domain models for the reporting pipeline.
//!
//! - [`EmployeeRecord`] - one validated CSV row
//! - [`PositionSummary`] - per-position aggregate for the performance report
//! - [`SkillSummary`] - per-skill aggregate for the skills report
//! - [`EmployeeSkillsProfile`] - a record with its tokenized skills

use serde::Serialize;

// =============================================================================
// Employee Record
// =============================================================================

/// Columns every source must provide.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "name",
    "position",
    "completed_tasks",
    "performance",
    "skills",
    "team",
    "experience_years",
];

/// A validated employee row.
///
/// Only [`crate::validation::validate_row`] builds these, so every
/// instance has passed all field checks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeRecord {
    pub name: String,
    pub position: String,
    pub completed_tasks: u64,
    pub performance: f64,
    /// Raw comma-delimited skills text, not yet tokenized.
    pub skills: String,
    pub team: String,
    pub experience_years: i64,
}

impl EmployeeRecord {
    /// Skill tokens of this record, in field order.
    pub fn skill_tokens(&self) -> Vec<String> {
        parse_skills(Some(&self.skills))
    }
}

/// Split a delimited skills field into trimmed, non-empty tokens.
///
/// An absent field yields no tokens.
///
/// # Example
/// ```
/// use staff_reporter::models::parse_skills;
///
/// assert_eq!(
///     parse_skills(Some(" Python , Django , PostgreSQL ")),
///     vec!["Python", "Django", "PostgreSQL"]
/// );
/// assert!(parse_skills(Some("")).is_empty());
/// assert!(parse_skills(None).is_empty());
/// ```
pub fn parse_skills(skills: Option<&str>) -> Vec<String> {
    skills
        .map(|s| {
            s.split(',')
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

/// Round to two decimals, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// =============================================================================
// Report Summaries
// =============================================================================

/// Average performance of one position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionSummary {
    pub position: String,
    /// Rounded to two decimals.
    pub avg_performance: f64,
    pub employee_count: usize,
    /// Member names in encounter order.
    pub employee_names: Vec<String>,
}

/// Popularity and average performance of one skill.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillSummary {
    pub skill: String,
    pub employee_count: usize,
    /// Rounded to two decimals.
    pub avg_performance: f64,
    /// Holder names in encounter order.
    pub employee_names: Vec<String>,
}

/// An employee record with the skills field tokenized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeSkillsProfile {
    pub name: String,
    pub position: String,
    pub completed_tasks: u64,
    pub performance: f64,
    pub team: String,
    pub experience_years: i64,
    pub skills: Vec<String>,
}

impl EmployeeSkillsProfile {
    pub fn from_record(record: &EmployeeRecord) -> Self {
        Self {
            name: record.name.clone(),
            position: record.position.clone(),
            completed_tasks: record.completed_tasks,
            performance: record.performance,
            team: record.team.clone(),
            experience_years: record.experience_years,
            skills: record.skill_tokens(),
        }
    }

    pub fn skills_count(&self) -> usize {
        self.skills.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skills_trims_and_drops_empty() {
        assert_eq!(
            parse_skills(Some("Python,, Go ,")),
            vec!["Python".to_string(), "Go".to_string()]
        );
        assert!(parse_skills(Some(" , ,")).is_empty());
    }

    #[test]
    fn test_round2_half_away_from_zero() {
        // 4.125 is exact in binary, so this pins the tie rule.
        assert_eq!(round2(4.125), 4.13);
        assert_eq!(round2(4.8), 4.8);
        assert_eq!(round2(4.666_666), 4.67);
    }

    #[test]
    fn test_profile_counts_tokens() {
        let record = EmployeeRecord {
            name: "Alice".into(),
            position: "Backend Developer".into(),
            completed_tasks: 12,
            performance: 4.5,
            skills: "Python, Django".into(),
            team: "Core".into(),
            experience_years: 3,
        };
        let profile = EmployeeSkillsProfile::from_record(&record);
        assert_eq!(profile.skills_count(), 2);
        assert_eq!(profile.skills, vec!["Python", "Django"]);
        assert_eq!(profile.name, "Alice");
        assert_eq!(profile.completed_tasks, 12);
        assert_eq!(profile.team, "Core");
        assert_eq!(profile.experience_years, 3);
    }
}
