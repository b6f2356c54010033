//! Settings panel configuration.
//!
//! # Responsibility
//! - Decode local UI toggles from JSON and validate their values.
//!
//! # Invariants
//! - Missing fields fall back to defaults.
//! - Settings are read-only input; nothing is written back.

use crate::logging::default_log_level;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Language codes offered by the settings panel.
pub const SUPPORTED_LANGUAGES: &[&str] = &["en", "hi", "ta", "te", "mr", "gu"];
/// Theme ids offered by the settings panel.
pub const SUPPORTED_THEMES: &[&str] = &["dark-red", "dark-blue", "dark-purple", "dark-green"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    #[default]
    Cloud,
    Local,
}

/// Local UI preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub language: String,
    pub theme: String,
    pub storage: StorageKind,
    pub notifications: bool,
    pub auto_sync: bool,
    /// Hides the reminders section when off.
    pub smart_reminders: bool,
    /// Overrides the build-mode default log level.
    pub log_level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            theme: "dark-red".to_string(),
            storage: StorageKind::Cloud,
            notifications: true,
            auto_sync: true,
            smart_reminders: true,
            log_level: None,
        }
    }
}

/// Settings load and validation failures.
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    UnsupportedLanguage(String),
    UnknownTheme(String),
}

impl Display for SettingsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read settings: {err}"),
            Self::Parse(err) => write!(f, "invalid settings json: {err}"),
            Self::UnsupportedLanguage(value) => write!(
                f,
                "unsupported language `{value}`; expected one of {}",
                SUPPORTED_LANGUAGES.join("|")
            ),
            Self::UnknownTheme(value) => write!(
                f,
                "unknown theme `{value}`; expected one of {}",
                SUPPORTED_THEMES.join("|")
            ),
        }
    }
}

impl Error for SettingsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::UnsupportedLanguage(_) | Self::UnknownTheme(_) => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl Settings {
    /// Decodes and validates settings from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !SUPPORTED_LANGUAGES.contains(&self.language.as_str()) {
            return Err(SettingsError::UnsupportedLanguage(self.language.clone()));
        }
        if !SUPPORTED_THEMES.contains(&self.theme.as_str()) {
            return Err(SettingsError::UnknownTheme(self.theme.clone()));
        }
        Ok(())
    }

    /// Effective log level: the override, else the build-mode default.
    pub fn effective_log_level(&self) -> &str {
        self.log_level
            .as_deref()
            .unwrap_or(default_log_level())
    }
}
