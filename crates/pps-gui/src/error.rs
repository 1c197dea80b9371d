//! GUI-specific error types.
//!
//! Nothing here is fatal. Errors are shown as a dismissable warning banner
//! above the active view while the application keeps running on defaults.

use thiserror::Error;

/// GUI-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GuiError {
    /// The configured content catalog could not be loaded.
    #[error("Failed to load content catalog: {reason}")]
    ContentLoad {
        /// Description of what went wrong.
        reason: String,
    },

    /// Failed to save settings.
    #[error("Failed to save settings: {reason}")]
    SettingsSave {
        /// Description of what went wrong.
        reason: String,
    },
}

impl GuiError {
    /// Korean banner text shown to the learner.
    pub fn banner_text(&self) -> &'static str {
        match self {
            Self::ContentLoad { .. } => "학습 콘텐츠를 불러오지 못해 기본 콘텐츠를 사용합니다.",
            Self::SettingsSave { .. } => "설정을 저장하지 못했습니다.",
        }
    }

    /// Get a user-friendly suggestion for resolving this error.
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::ContentLoad { .. } => "settings.toml의 catalog_path와 파일 형식을 확인해주세요.",
            Self::SettingsSave { .. } => "설정 폴더의 쓰기 권한을 확인해주세요.",
        }
    }

    // =========================================================================
    // FACTORY METHODS
    // =========================================================================

    /// Create a content load error from any error source.
    pub fn content_load(err: impl std::fmt::Display) -> Self {
        Self::ContentLoad {
            reason: err.to_string(),
        }
    }

    /// Create a settings save error from any error source.
    pub fn settings_save(err: impl std::fmt::Display) -> Self {
        Self::SettingsSave {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_keeps_reason() {
        let err = GuiError::content_load("missing file");
        assert_eq!(
            err,
            GuiError::ContentLoad {
                reason: "missing file".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "Failed to load content catalog: missing file"
        );
    }

    #[test]
    fn test_banner_text_per_kind() {
        assert_ne!(
            GuiError::content_load("x").banner_text(),
            GuiError::settings_save("x").banner_text()
        );
    }
}
