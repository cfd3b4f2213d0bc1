//! Runtime configuration for survey handlers.
//!
//! # Responsibility
//! - Resolve the store path, log settings and tag matching mode.
//! - Read `SURVEY_*` environment variables with blank-means-default rules.
//!
//! # Invariants
//! - Resolution never touches the filesystem.
//! - Only an unparseable tag matching mode is an error; every other value
//!   falls back to its default.

use crate::logging::default_log_level;
use crate::stats::aggregator::{AggregateOptions, TagMatchMode, UnknownTagMatchMode};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "SURVEY_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "SURVEY_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "SURVEY_LOG_DIR";
pub const TAG_MATCH_ENV: &str = "SURVEY_TAG_MATCH";

const DEFAULT_DB_FILE_NAME: &str = "survey.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    TagMatch(UnknownTagMatchMode),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TagMatch(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::TagMatch(err) => Some(err),
        }
    }
}

impl From<UnknownTagMatchMode> for ConfigError {
    fn from(value: UnknownTagMatchMode) -> Self {
        Self::TagMatch(value)
    }
}

/// Resolved survey configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyConfig {
    pub db_path: PathBuf,
    pub log_level: String,
    /// File logging is off when `None`.
    pub log_dir: Option<PathBuf>,
    pub tag_match: TagMatchMode,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            db_path: std::env::temp_dir().join(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level().to_string(),
            log_dir: None,
            tag_match: TagMatchMode::default(),
        }
    }
}

impl SurveyConfig {
    /// Resolves configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|trimmed| !trimmed.is_empty())
        };

        let mut config = Self::default();
        if let Some(path) = value(DB_PATH_ENV) {
            config.db_path = PathBuf::from(path);
        }
        if let Some(level) = value(LOG_LEVEL_ENV) {
            config.log_level = level;
        }
        config.log_dir = value(LOG_DIR_ENV).map(PathBuf::from);
        if let Some(mode) = value(TAG_MATCH_ENV) {
            config.tag_match = mode.parse()?;
        }
        Ok(config)
    }

    pub fn aggregate_options(&self) -> AggregateOptions {
        AggregateOptions {
            tag_match: self.tag_match,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, SurveyConfig, DB_PATH_ENV, LOG_DIR_ENV, TAG_MATCH_ENV};
    use crate::stats::aggregator::TagMatchMode;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = SurveyConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, SurveyConfig::default());
        assert!(config.db_path.ends_with("survey.db"));
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = SurveyConfig::from_lookup(lookup(&[(DB_PATH_ENV, "   ")])).unwrap();
        assert_eq!(config.db_path, SurveyConfig::default().db_path);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = SurveyConfig::from_lookup(lookup(&[
            (DB_PATH_ENV, " /var/lib/survey/responses.db "),
            (LOG_DIR_ENV, "/var/log/survey"),
            (TAG_MATCH_ENV, "exact"),
        ]))
        .unwrap();
        assert_eq!(config.db_path, PathBuf::from("/var/lib/survey/responses.db"));
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/survey")));
        assert_eq!(config.aggregate_options().tag_match, TagMatchMode::Exact);
    }

    #[test]
    fn unknown_tag_match_mode_is_rejected() {
        let err = SurveyConfig::from_lookup(lookup(&[(TAG_MATCH_ENV, "fuzzy")])).unwrap_err();
        assert!(matches!(err, ConfigError::TagMatch(_)));
        assert!(err.to_string().contains("fuzzy"));
    }
}
