use std::path::PathBuf;

/// Errors that can occur when reading or writing the preference file.
#[derive(Debug, thiserror::Error)]
pub enum PrefsError {
    #[error("failed to read preferences from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse preferences from {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefs_error_display() {
        let err = PrefsError::Read {
            path: PathBuf::from("prefs.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read preferences from prefs.json: denied"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("rules.placement_budget must be in 1..=12".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: rules.placement_budget must be in 1..=12"
        );
    }
}
