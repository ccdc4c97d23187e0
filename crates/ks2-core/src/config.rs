//! ks2 configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::scheme::ScheduleConfig;

/// Top-level ks2 configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ks2Config {
    /// Directory holding the activity log and the diagnostic handoff.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Where printable schemes and downloads are written.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Defaults for the plan builder.
    #[serde(default)]
    pub schedule: ScheduleDefaults,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./.ks2")
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./ks2-output")
}

impl Default for Ks2Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            output_dir: default_output_dir(),
            schedule: ScheduleDefaults::default(),
        }
    }
}

/// Schedule values used when the user does not give them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleDefaults {
    #[serde(default = "default_days")]
    pub days_per_week: u8,
    #[serde(default = "default_hours")]
    pub hours_per_day: f64,
    #[serde(default = "default_terms")]
    pub terms: u32,
    #[serde(default = "default_true")]
    pub include_holidays: bool,
    /// Length of the scheme in months, counted from the start date.
    #[serde(default = "default_months")]
    pub length_months: u32,
}

fn default_days() -> u8 {
    5
}
fn default_hours() -> f64 {
    1.0
}
fn default_terms() -> u32 {
    3
}
fn default_true() -> bool {
    true
}
fn default_months() -> u32 {
    9
}

impl Default for ScheduleDefaults {
    fn default() -> Self {
        Self {
            days_per_week: default_days(),
            hours_per_day: default_hours(),
            terms: default_terms(),
            include_holidays: true,
            length_months: default_months(),
        }
    }
}

impl ScheduleDefaults {
    /// A full schedule starting on `start`.
    pub fn schedule_from(&self, start: NaiveDate) -> ScheduleConfig {
        ScheduleConfig {
            days_per_week: self.days_per_week,
            hours_per_day: self.hours_per_day,
            start_date: start,
            end_date: start
                .checked_add_months(Months::new(self.length_months))
                .unwrap_or(start),
            terms: self.terms,
            include_holidays: self.include_holidays,
        }
    }
}

/// Expand `${NAME}` references in a configured path. Unset variables expand
/// to nothing; an unterminated `${` is kept literally.
fn expand_vars(raw: &str) -> String {
    let mut expanded = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(open) = rest.find("${") {
        let Some(close) = rest[open + 2..].find('}') else {
            break;
        };
        expanded.push_str(&rest[..open]);
        let name = &rest[open + 2..open + 2 + close];
        if let Ok(value) = std::env::var(name) {
            expanded.push_str(&value);
        }
        rest = &rest[open + 2 + close + 1..];
    }
    expanded.push_str(rest);
    expanded
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(expand_vars(&path.to_string_lossy()))
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `ks2.toml` in the current directory
/// 2. `~/.config/ks2/config.toml`
///
/// Environment variable override: `KS2_DATA_DIR`.
pub fn load_config() -> Result<Ks2Config> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<Ks2Config> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("ks2.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => Ks2Config::default(),
    };

    if let Ok(dir) = std::env::var("KS2_DATA_DIR") {
        if !dir.is_empty() {
            config.data_dir = PathBuf::from(dir);
        }
    }

    config.data_dir = resolve_path(&config.data_dir);
    config.output_dir = resolve_path(&config.output_dir);

    Ok(config)
}

/// Parse a TOML config document.
pub fn parse_config(content: &str) -> Result<Ks2Config> {
    let config: Ks2Config = toml::from_str(content)?;
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("ks2"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_variables_expand() {
        std::env::set_var("_KS2_TEST_HOME", "/srv/ks2");
        std::env::remove_var("_KS2_TEST_UNSET");
        assert_eq!(expand_vars("${_KS2_TEST_HOME}/data"), "/srv/ks2/data");
        assert_eq!(expand_vars("a/${_KS2_TEST_UNSET}/b"), "a//b");
        assert_eq!(expand_vars("out/${_KS2_TEST_HOME"), "out/${_KS2_TEST_HOME");
        assert_eq!(expand_vars("plain"), "plain");
        assert_eq!(
            resolve_path(Path::new("${_KS2_TEST_HOME}/plans")),
            PathBuf::from("/srv/ks2/plans")
        );
        std::env::remove_var("_KS2_TEST_HOME");
    }

    #[test]
    fn default_config() {
        let config = Ks2Config::default();
        assert_eq!(config.data_dir, PathBuf::from("./.ks2"));
        assert_eq!(config.schedule.days_per_week, 5);
        assert_eq!(config.schedule.terms, 3);
        assert_eq!(config.schedule.length_months, 9);
    }

    #[test]
    fn parse_partial_config() {
        let config = parse_config(
            r#"
data_dir = "/tmp/ks2-data"

[schedule]
days_per_week = 4
hours_per_day = 1.5
"#,
        )
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/ks2-data"));
        assert_eq!(config.output_dir, PathBuf::from("./ks2-output"));
        assert_eq!(config.schedule.days_per_week, 4);
        assert_eq!(config.schedule.hours_per_day, 1.5);
        assert_eq!(config.schedule.terms, 3);
        assert!(config.schedule.include_holidays);
    }

    #[test]
    fn schedule_from_defaults() {
        let start = NaiveDate::from_ymd_opt(2024, 9, 2).unwrap();
        let schedule = ScheduleDefaults::default().schedule_from(start);
        assert_eq!(schedule.end_date, NaiveDate::from_ymd_opt(2025, 6, 2).unwrap());
        assert_eq!(schedule.days_per_week, 5);
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let err = load_config_from(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_config_file_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ks2.toml");
        std::fs::write(&path, "output_dir = \"out\"\n[schedule]\nterms = 2\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.schedule.terms, 2);
    }
}
