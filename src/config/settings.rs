//! User settings for the budget dashboard
//!
//! Holds report preferences. Currency and date formats are fixed.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::BudgetPaths;
use crate::error::BudgetError;

/// Number of trailing expenses listed in an exported report
pub const DEFAULT_RECENT_EXPENSE_LIMIT: usize = 10;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// How many of the most recently added expenses a report lists
    #[serde(default = "default_recent_expense_limit")]
    pub recent_expense_limit: usize,

    /// Directory reports are written to when no `--output` is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_dir: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_recent_expense_limit() -> usize {
    DEFAULT_RECENT_EXPENSE_LIMIT
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            recent_expense_limit: default_recent_expense_limit(),
            report_dir: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BudgetError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BudgetError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BudgetError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Resolve where a report should be written
    pub fn report_output_dir(&self, requested: Option<PathBuf>) -> PathBuf {
        requested
            .or_else(|| self.report_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.recent_expense_limit, 10);
        assert!(settings.report_dir.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            recent_expense_limit: 25,
            report_dir: Some(PathBuf::from("/tmp/reports")),
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.recent_expense_limit, 25);
        assert_eq!(loaded.report_dir, Some(PathBuf::from("/tmp/reports")));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.recent_expense_limit, DEFAULT_RECENT_EXPENSE_LIMIT);
    }

    #[test]
    fn test_report_output_dir_precedence() {
        let settings = Settings {
            report_dir: Some(PathBuf::from("configured")),
            ..Settings::default()
        };
        assert_eq!(
            settings.report_output_dir(Some(PathBuf::from("flag"))),
            PathBuf::from("flag")
        );
        assert_eq!(settings.report_output_dir(None), PathBuf::from("configured"));
        assert_eq!(
            Settings::default().report_output_dir(None),
            PathBuf::from(".")
        );
    }
}
