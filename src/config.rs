//! Scheduler configuration.
//!
//! Loaded from TOML. Every field is optional and falls back to the school
//! defaults:
//!
//! ```toml
//! class_limit = 7
//! max_student_sections = 6
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{CLASS_LIMIT, MAX_STUDENT_SECTIONS};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Roster limit per section.
    pub class_limit: usize,
    /// Maximum sections a student can hold; enforced on enrollment.
    pub max_student_sections: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            class_limit: CLASS_LIMIT,
            max_student_sections: MAX_STUDENT_SECTIONS,
        }
    }
}

impl SchedulerConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    pub fn from_toml_str(toml_str: &str) -> anyhow::Result<Self> {
        let config: SchedulerConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn with_class_limit(mut self, class_limit: usize) -> Self {
        self.class_limit = class_limit;
        self
    }

    pub fn with_max_student_sections(mut self, max: usize) -> Self {
        self.max_student_sections = max;
        self
    }

    pub fn validate(&self) -> ScheduleResult<()> {
        if self.class_limit == 0 {
            return Err(ScheduleError::InvalidConfig(
                "class_limit must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SchedulerConfig::default();
        assert_eq!(config.class_limit, 7);
        assert_eq!(config.max_student_sections, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial() {
        let config = SchedulerConfig::from_toml_str("class_limit = 5\n").unwrap();
        assert_eq!(config.class_limit, 5);
        assert_eq!(config.max_student_sections, 6);
    }

    #[test]
    fn test_parse_empty() {
        let config = SchedulerConfig::from_toml_str("").unwrap();
        assert_eq!(config, SchedulerConfig::default());
    }

    #[test]
    fn test_zero_class_limit_rejected() {
        assert!(SchedulerConfig::from_toml_str("class_limit = 0").is_err());
        assert!(matches!(
            SchedulerConfig::default().with_class_limit(0).validate(),
            Err(ScheduleError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = SchedulerConfig::default().with_max_student_sections(4);
        let text = config.to_toml_string().unwrap();
        assert!(text.contains("max_student_sections = 4"));
        assert_eq!(SchedulerConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_from_file_missing() {
        assert!(SchedulerConfig::from_file(Path::new("/nonexistent/schedule.toml")).is_err());
    }
}
