//! Bridge settings persisted next to the host's other configuration.
//!
//! The file lives at `~/.config/crossmod/settings.json` on most platforms and
//! may be redirected with `CROSSMOD_SETTINGS_PATH`. Files ending in `.yaml` or
//! `.yml` are parsed as YAML; everything else is parsed as JSON. Every field
//! is optional.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use dirs_next::config_dir;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::expand_tilde;

/// Environment variable allowing callers to override the settings file path.
pub const SETTINGS_PATH_ENV: &str = "CROSSMOD_SETTINGS_PATH";

/// Default filename for the settings payload.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Error surfaced when reading the settings file fails.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("settings YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// How the dynamic provider decides whether its values changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DynamicChangeDetection {
    /// Re-fetch every cached token and compare with the last observed values.
    #[default]
    Compare,
    /// Report a change on every refresh cycle.
    Always,
}

/// Names under which the four providers are registered with the host engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenNames {
    pub config: String,
    pub translation: String,
    pub dynamic: String,
    pub asset: String,
}

impl Default for TokenNames {
    fn default() -> Self {
        Self {
            config: "Config".to_string(),
            translation: "Translation".to_string(),
            dynamic: "Dynamic".to_string(),
            asset: "Asset".to_string(),
        }
    }
}

/// Settings consumed when building a provider session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeSettings {
    /// Overrides the owner id the host passes when starting a session.
    pub owner_id: Option<String>,
    pub token_names: TokenNames,
    pub dynamic_change_detection: DynamicChangeDetection,
    /// Default `tracing` filter directive when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for BridgeSettings {
    fn default() -> Self {
        Self {
            owner_id: None,
            token_names: TokenNames::default(),
            dynamic_change_detection: DynamicChangeDetection::default(),
            log_filter: "info".to_string(),
        }
    }
}

impl BridgeSettings {
    /// Loads settings from the default path, falling back to defaults when the
    /// file is missing or unreadable.
    pub fn load() -> Self {
        let path = default_settings_path();
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(error) => {
                warn!(
                    path = %path.display(),
                    error = %error,
                    "Failed to load bridge settings; using defaults"
                );
                Self::default()
            }
        }
    }

    /// Loads settings from `path`. A missing file yields defaults; malformed
    /// content is an error.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no bridge settings file; using defaults");
                return Ok(Self::default());
            }
            Err(error) => return Err(SettingsError::Io(error)),
        };
        Self::parse(path, &content)
    }

    fn parse(path: &Path, content: &str) -> Result<Self, SettingsError> {
        let is_yaml = path
            .extension()
            .and_then(|extension| extension.to_str())
            .is_some_and(|extension| extension.eq_ignore_ascii_case("yaml") || extension.eq_ignore_ascii_case("yml"));
        if is_yaml {
            Ok(serde_yaml::from_str(content)?)
        } else {
            Ok(serde_json::from_str(content)?)
        }
    }

}

/// Get the default path for the settings file.
pub fn default_settings_path() -> PathBuf {
    if let Ok(path) = env::var(SETTINGS_PATH_ENV)
        && !path.trim().is_empty()
    {
        return expand_tilde(&path);
    }

    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("crossmod")
        .join(SETTINGS_FILE_NAME)
}
