//! Typed, read-only settings.
//!
//! [`Settings`] is built once at startup from an optional `KEY=VALUE` env file
//! and the process environment, then passed by reference to every component.
//!
//! Each recognised key has a [`SettingKind`] with one conversion function per
//! kind, so a bad value is rejected at load time rather than at use.
//!
//! # Example
//!
//! ```
//! use staff_reporter::config::Settings;
//!
//! let settings = Settings::from_pairs([
//!     ("MAX_PERFORMANCE", "10"),
//!     ("sort_order", "asc"),
//! ])
//! .unwrap();
//! assert_eq!(settings.max_performance, 10.0);
//! assert!(!settings.sort_descending());
//! ```

use serde::Serialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{ConfigError, ConfigResult};
use crate::report::table::TableFormat;
use crate::validation::ValidationRules;

/// Env file read when no explicit one is given.
pub const DEFAULT_ENV_FILE: &str = ".env";

// =============================================================================
// Setting Kinds
// =============================================================================

/// Value kind of a recognised setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    Float,
    Int,
    Bool,
    Text,
}

/// A converted setting value.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    Float(f64),
    Int(i64),
    Bool(bool),
    Text(String),
}

impl SettingKind {
    fn name(self) -> &'static str {
        match self {
            SettingKind::Float => "number",
            SettingKind::Int => "integer",
            SettingKind::Bool => "boolean",
            SettingKind::Text => "string",
        }
    }

    /// Convert a raw string to this kind.
    pub fn convert(self, key: &str, raw: &str) -> ConfigResult<SettingValue> {
        let value = raw.trim();
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw.to_string(),
            expected: self.name(),
        };

        match self {
            SettingKind::Float => value
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(SettingValue::Float)
                .ok_or_else(invalid),
            SettingKind::Int => value
                .parse::<i64>()
                .map(SettingValue::Int)
                .map_err(|_| invalid()),
            SettingKind::Bool => parse_bool(value).map(SettingValue::Bool).ok_or_else(invalid),
            SettingKind::Text => Ok(SettingValue::Text(value.to_string())),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Older spelling of `AUTO_DISCOVER_FOLDER`.
const ALIAS_AUTO_DISCOVER: &str = "AUTO_DISCOVER_CSV_FOLDER";

/// Recognised keys and their kinds.
pub const SETTING_KINDS: &[(&str, SettingKind)] = &[
    ("MIN_PERFORMANCE", SettingKind::Float),
    ("MAX_PERFORMANCE", SettingKind::Float),
    ("MIN_EXPERIENCE_YEARS", SettingKind::Int),
    ("SORT_BY_PERFORMANCE", SettingKind::Bool),
    ("SORT_ORDER", SettingKind::Text),
    ("TABLE_FORMAT", SettingKind::Text),
    ("SKILLS_REPORT_MIN_OCCURRENCE", SettingKind::Int),
    ("INCLUDE_SUBFOLDERS", SettingKind::Bool),
    ("AUTO_DISCOVER_FOLDER", SettingKind::Bool),
    (ALIAS_AUTO_DISCOVER, SettingKind::Bool),
    ("CSV_FOLDER_PATH", SettingKind::Text),
    ("DEFAULT_REPORT_TYPE", SettingKind::Text),
];

fn kind_of(key: &str) -> Option<(&'static str, SettingKind)> {
    SETTING_KINDS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .copied()
}

// =============================================================================
// Settings
// =============================================================================

/// Process-wide settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    pub min_performance: f64,
    pub max_performance: f64,
    pub min_experience_years: i64,
    pub sort_by_performance: bool,
    pub sort_order: String,
    pub table_format: TableFormat,
    pub skills_min_occurrence: usize,
    pub include_subfolders: bool,
    pub auto_discover_folder: bool,
    pub csv_folder_path: Option<PathBuf>,
    pub default_report_type: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_performance: 0.0,
            max_performance: 5.0,
            min_experience_years: 0,
            sort_by_performance: true,
            sort_order: "desc".to_string(),
            table_format: TableFormat::Grid,
            skills_min_occurrence: 2,
            include_subfolders: true,
            auto_discover_folder: false,
            csv_folder_path: None,
            default_report_type: None,
        }
    }
}

impl Settings {
    /// Build settings from key/value pairs over the defaults.
    ///
    /// Keys match case-insensitively; unknown keys are ignored. When a
    /// setting appears more than once, the upper-case spelling wins over
    /// other spellings, and `AUTO_DISCOVER_FOLDER` wins over its alias.
    /// Otherwise the last occurrence wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut recognised: Vec<(&'static str, SettingKind, bool, V)> = pairs
            .into_iter()
            .filter_map(|(key, raw)| {
                let key = key.as_ref();
                kind_of(key).map(|(name, kind)| (name, kind, key == name, raw))
            })
            .collect();
        recognised.sort_by_key(|(name, _, exact, _)| (*exact, *name != ALIAS_AUTO_DISCOVER));

        let mut settings = Self::default();
        for (name, kind, _, raw) in recognised {
            let value = kind.convert(name, raw.as_ref())?;
            settings.apply(name, value)?;
        }

        if settings.min_performance > settings.max_performance {
            return Err(ConfigError::InvalidPerformanceRange {
                min: settings.min_performance,
                max: settings.max_performance,
            });
        }

        Ok(settings)
    }

    /// Build settings from OS-level pairs.
    ///
    /// Entries that are not recognised settings are skipped without being
    /// decoded. A recognised key with a non-UTF-8 value is an error.
    pub fn from_os_pairs<I>(pairs: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        let mut decoded = Vec::new();
        for (key, raw) in pairs {
            let Some(key) = key.to_str().filter(|k| kind_of(k).is_some()) else {
                continue;
            };
            let raw = raw.into_string().map_err(|raw| ConfigError::InvalidValue {
                key: key.to_string(),
                value: raw.to_string_lossy().into_owned(),
                expected: "UTF-8 string",
            })?;
            decoded.push((key.to_string(), raw));
        }
        Self::from_pairs(decoded)
    }

    /// Build settings from the process environment.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_os_pairs(std::env::vars_os())
    }

    /// Load an env file into the environment, then build settings from it.
    pub fn load(env_file: Option<&Path>) -> ConfigResult<Self> {
        Self::load_env_file(env_file)?;
        Self::from_env()
    }

    /// Load an env file into the process environment.
    ///
    /// With `None`, `.env` is read if present. An explicit file must exist.
    /// Variables already set in the environment win over the file.
    pub fn load_env_file(env_file: Option<&Path>) -> ConfigResult<()> {
        match env_file {
            Some(path) => {
                dotenvy::from_path(path).map_err(|source| ConfigError::EnvFile {
                    path: path.to_path_buf(),
                    source,
                })?;
                debug!(path = %path.display(), "loaded env file");
            }
            None => {
                if dotenvy::from_filename(DEFAULT_ENV_FILE).is_ok() {
                    debug!(path = DEFAULT_ENV_FILE, "loaded env file");
                }
            }
        }
        Ok(())
    }

    fn apply(&mut self, name: &str, value: SettingValue) -> ConfigResult<()> {
        match (name, value) {
            ("MIN_PERFORMANCE", SettingValue::Float(v)) => self.min_performance = v,
            ("MAX_PERFORMANCE", SettingValue::Float(v)) => self.max_performance = v,
            ("MIN_EXPERIENCE_YEARS", SettingValue::Int(v)) => self.min_experience_years = v,
            ("SORT_BY_PERFORMANCE", SettingValue::Bool(v)) => self.sort_by_performance = v,
            ("SORT_ORDER", SettingValue::Text(v)) => self.sort_order = v,
            ("TABLE_FORMAT", SettingValue::Text(v)) => {
                self.table_format = v.parse().unwrap_or_else(|_| {
                    warn!(format = %v, "unknown TABLE_FORMAT, falling back to grid");
                    TableFormat::Grid
                });
            }
            ("SKILLS_REPORT_MIN_OCCURRENCE", SettingValue::Int(v)) => {
                self.skills_min_occurrence =
                    usize::try_from(v).map_err(|_| ConfigError::InvalidValue {
                        key: name.to_string(),
                        value: v.to_string(),
                        expected: "non-negative integer",
                    })?;
            }
            ("INCLUDE_SUBFOLDERS", SettingValue::Bool(v)) => self.include_subfolders = v,
            ("AUTO_DISCOVER_FOLDER" | ALIAS_AUTO_DISCOVER, SettingValue::Bool(v)) => {
                self.auto_discover_folder = v;
            }
            ("CSV_FOLDER_PATH", SettingValue::Text(v)) => {
                self.csv_folder_path = (!v.is_empty()).then(|| PathBuf::from(v));
            }
            ("DEFAULT_REPORT_TYPE", SettingValue::Text(v)) => {
                self.default_report_type = (!v.is_empty()).then_some(v);
            }
            _ => {}
        }
        Ok(())
    }

    /// `SORT_ORDER` is `desc`, ignoring case.
    pub fn sort_descending(&self) -> bool {
        self.sort_order.eq_ignore_ascii_case("desc")
    }

    /// Bounds used by the record validator.
    pub fn validation_rules(&self) -> ValidationRules {
        ValidationRules {
            min_performance: self.min_performance,
            max_performance: self.max_performance,
            min_experience_years: self.min_experience_years,
        }
    }
}
