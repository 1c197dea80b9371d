//! Application settings - persisted user preferences.
//!
//! Settings cover where content comes from and which view opens first.
//! Learning progress is never written here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::navigation::View;
use crate::error::GuiError;

// =============================================================================
// ROOT SETTINGS
// =============================================================================

/// Application settings.
///
/// Serialized to TOML and stored in the user's config directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Content source settings.
    pub content: ContentSettings,

    /// Display settings.
    pub display: DisplaySettings,
}

impl Settings {
    /// Load settings from the default path.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from a specific path.
    ///
    /// A missing file yields defaults silently; an unparsable one yields
    /// defaults with a warning.
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        toml::from_str(&content).unwrap_or_else(|err| {
            warn!(path = %path.display(), error = %err, "ignoring unreadable settings");
            Self::default()
        })
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), GuiError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GuiError::settings_save)?;
        }

        let content = toml::to_string_pretty(self).map_err(GuiError::settings_save)?;

        std::fs::write(path, content).map_err(GuiError::settings_save)
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "PromptPracticeStudio", "PPS")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }
}

// =============================================================================
// CONTENT SETTINGS
// =============================================================================

/// Where the content catalog is read from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentSettings {
    /// Catalog file to use instead of the built-in content.
    pub catalog_path: Option<PathBuf>,
}

// =============================================================================
// DISPLAY SETTINGS
// =============================================================================

/// Display preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// View shown at startup.
    pub start_view: View,

    /// Store the last visited view as `start_view` on every navigation.
    pub remember_last_view: bool,
}
