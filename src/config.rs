use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::game::{RulesConfig, CELL_COUNT};

/// Terminal UI settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Event poll interval, which is also the timer repaint rate.
    pub tick_ms: u64,
    pub prefs_path: PathBuf,
    /// Persist the color of the last placed piece between runs.
    pub remember_last_color: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            tick_ms: 100,
            prefs_path: PathBuf::from("pion_duel_prefs.json"),
            remember_last_color: true,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub rules: RulesConfig,
    pub ui: UiConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!("Warning: config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Both budgets plus Green's extra piece must fit on the board
        let max_budget = (CELL_COUNT as i32 - 1) / 2;
        if self.rules.placement_budget < 1 || self.rules.placement_budget > max_budget {
            return Err(ConfigError::Validation(format!(
                "rules.placement_budget must be in 1..={max_budget}"
            )));
        }
        if self.ui.tick_ms == 0 {
            return Err(ConfigError::Validation("ui.tick_ms must be > 0".into()));
        }
        if self.ui.remember_last_color && self.ui.prefs_path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "ui.prefs_path must be set when ui.remember_last_color is on".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.rules.placement_budget, 12);
        assert!(config.rules.row_wrap);
        assert!(!config.rules.symmetric_budget);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[rules]
symmetric_budget = true
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert!(config.rules.symmetric_budget);
        // Other fields should be defaults
        assert_eq!(config.rules.placement_budget, 12);
        assert_eq!(config.ui.tick_ms, 100);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        let default = AppConfig::default();
        assert_eq!(config.rules, default.rules);
        assert_eq!(config.ui.prefs_path, default.ui.prefs_path);
    }

    #[test]
    fn test_validation_rejects_zero_budget() {
        let mut config = AppConfig::default();
        config.rules.placement_budget = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_budget_larger_than_board() {
        let mut config = AppConfig::default();
        config.rules.placement_budget = 13;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_tick() {
        let mut config = AppConfig::default();
        config.ui.tick_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_prefs_path() {
        let mut config = AppConfig::default();
        config.ui.prefs_path = PathBuf::new();
        assert!(config.validate().is_err());

        config.ui.remember_last_color = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.rules.placement_budget, 12);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[rules]
placement_budget = 6
row_wrap = false
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.rules.placement_budget, 6);
        assert!(!config.rules.row_wrap);
        // Others are defaults
        assert_eq!(config.ui.tick_ms, 100);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[rules]\nplacement_budget = 40\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
