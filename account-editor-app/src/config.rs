//! Application configuration

use std::fs;
use std::path::{Path, PathBuf};

use account_editor_core::i18n::Language;
use account_editor_core::types::ValidationLimits;
use account_editor_core::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

/// Directory name under the platform config dir
const APP_DIR_NAME: &str = "account-editor";

/// Default accounts file name
const ACCOUNTS_FILE_NAME: &str = "accounts.json";

/// Application configuration, stored as camelCase JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Message language code, e.g. `"en-US"` or `"ru-RU"`
    pub language: String,
    /// Where the account collection lives; `None` means the platform default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_path: Option<PathBuf>,
    pub limits: ValidationLimits,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: Language::default().code().to_string(),
            storage_path: None,
            limits: ValidationLimits::default(),
        }
    }
}

impl AppConfig {
    /// Load from `path`; a missing file gives the defaults
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(path).map_err(|e| CoreError::ConfigError(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| CoreError::ConfigError(e.to_string()))
    }

    /// Save as pretty JSON, creating parent directories
    pub fn save(&self, path: &Path) -> CoreResult<()> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir).map_err(|e| CoreError::ConfigError(e.to_string()))?;
            }
        }
        let content =
            serde_json::to_string_pretty(self).map_err(|e| CoreError::ConfigError(e.to_string()))?;
        fs::write(path, content).map_err(|e| CoreError::ConfigError(e.to_string()))
    }

    /// Configured language; unknown codes fall back to English
    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_else(|| {
            log::warn!("Unknown language '{}', falling back to en-US", self.language);
            Language::default()
        })
    }

    /// Resolved accounts file path
    pub fn storage_path(&self) -> PathBuf {
        self.storage_path
            .clone()
            .unwrap_or_else(|| config_dir().join(ACCOUNTS_FILE_NAME))
    }
}

/// Platform config directory for this app
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

/// Default config file path
pub fn default_config_path() -> PathBuf {
    config_dir().join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&tmp.path().join("nope.json")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.language(), Language::EnUs);
    }

    #[test]
    fn save_then_load() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join("config.json");
        let config = AppConfig {
            language: "ru-RU".to_string(),
            storage_path: Some(tmp.path().join("accounts.json")),
            limits: ValidationLimits {
                login_max_length: 20,
                ..ValidationLimits::default()
            },
        };

        config.save(&path).unwrap();
        assert_eq!(AppConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        fs::write(&path, r#"{"language":"ru"}"#).unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.language(), Language::RuRu);
        assert_eq!(config.limits, ValidationLimits::default());
        assert!(config.storage_path.is_none());
    }

    #[test]
    fn malformed_file_is_config_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(CoreError::ConfigError(_))
        ));
    }

    #[test]
    fn unknown_language_falls_back() {
        let config = AppConfig {
            language: "xx".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.language(), Language::EnUs);
    }

    #[test]
    fn default_storage_path_is_under_config_dir() {
        let path = AppConfig::default().storage_path();
        assert!(path.ends_with("account-editor/accounts.json"));
    }
}
