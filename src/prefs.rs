//! Persisted user preferences.
//!
//! Two flags survive between sessions: whether sound effects are on and which
//! language is selected. They are loaded once at start and written back on
//! every change. A missing or unreadable file is never fatal; the defaults
//! (sound on, English) are used instead.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::types::{Language, DEFAULT_LANGUAGE};

/// File name used under the configuration directory.
pub const PREFS_FILE: &str = "prefs.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    #[serde(rename = "SoundFX")]
    pub sound_fx: bool,
    #[serde(rename = "selectedLanguage")]
    pub selected_language: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            sound_fx: true,
            selected_language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl Preferences {
    /// Selected language, or English when the stored code is unknown.
    pub fn language(&self) -> Language {
        Language::from_code(&self.selected_language).unwrap_or_default()
    }

    pub fn set_language(&mut self, language: Language) {
        self.selected_language = language.code().to_string();
    }

    /// Read preferences from `path`.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    pub fn try_load(path: &Path) -> Result<Option<Self>> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", path.display()));
            }
        };
        let prefs = serde_json::from_str(&raw)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(Some(prefs))
    }

    /// Read preferences from `path`, falling back to defaults.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(Some(prefs)) => {
                debug!("loaded preferences from {}", path.display());
                prefs
            }
            Ok(None) => Self::default(),
            Err(e) => {
                warn!("ignoring preferences: {:#}", e);
                Self::default()
            }
        }
    }

    /// Write preferences to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        debug!("saved preferences to {}", path.display());
        Ok(())
    }

    /// Preferences path: `explicit`, else `HANGMAN_PREFS_PATH`, else
    /// `$HOME/.config/hangman-tui/prefs.json`.
    pub fn resolve_path(explicit: Option<PathBuf>) -> PathBuf {
        use std::env;

        if let Some(path) = explicit {
            return path;
        }
        if let Some(path) = env::var("HANGMAN_PREFS_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
        {
            return PathBuf::from(path);
        }
        match env::var_os("HOME") {
            Some(home) => PathBuf::from(home)
                .join(".config")
                .join("hangman-tui")
                .join(PREFS_FILE),
            None => PathBuf::from(PREFS_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sound_on_english() {
        let prefs = Preferences::default();
        assert!(prefs.sound_fx);
        assert_eq!(prefs.selected_language, "en");
        assert_eq!(prefs.language(), Language::English);
    }

    #[test]
    fn unknown_language_code_maps_to_english() {
        let prefs = Preferences {
            sound_fx: false,
            selected_language: "tlh".to_string(),
        };
        assert_eq!(prefs.language(), Language::English);
    }

    #[test]
    fn json_uses_stored_key_names() {
        let mut prefs = Preferences::default();
        prefs.set_language(Language::Georgian);
        let json = serde_json::to_string(&prefs).unwrap();
        assert!(json.contains("\"SoundFX\":true"));
        assert!(json.contains("\"selectedLanguage\":\"ka\""));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let prefs: Preferences = serde_json::from_str(r#"{"SoundFX": false}"#).unwrap();
        assert!(!prefs.sound_fx);
        assert_eq!(prefs.selected_language, "en");
    }

    #[test]
    fn explicit_path_wins() {
        let path = PathBuf::from("/tmp/custom-prefs.json");
        assert_eq!(Preferences::resolve_path(Some(path.clone())), path);
    }
}
