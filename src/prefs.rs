//! Cosmetic preferences kept between runs. Nothing here affects the rules;
//! the UI only uses it to greet the player with the last color placed.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PrefsError;
use crate::game::PlayerColor;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_color: Option<PlayerColor>,
}

/// Reads and writes [`Preferences`] as JSON at a fixed path.
#[derive(Debug, Clone)]
pub struct PrefsStore {
    path: PathBuf,
}

impl PrefsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        PrefsStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load preferences; a missing file yields the defaults.
    pub fn load(&self) -> Result<Preferences, PrefsError> {
        if !self.path.exists() {
            return Ok(Preferences::default());
        }
        let json = fs::read_to_string(&self.path).map_err(|e| PrefsError::Read {
            path: self.path.clone(),
            source: e,
        })?;
        serde_json::from_str(&json).map_err(|e| PrefsError::Parse {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Write preferences through a temp file and rename.
    pub fn save(&self, prefs: &Preferences) -> Result<(), PrefsError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(prefs)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn remember_last_color(&self, color: PlayerColor) -> Result<(), PrefsError> {
        let mut prefs = self.load().unwrap_or_default();
        prefs.last_color = Some(color);
        self.save(&prefs)
    }
}
