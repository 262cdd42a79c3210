//! Configuration types for fontscope
//!
//! Mirrors `config.toml`:
//! - `[api]` - analysis service address and timeout
//! - `[upload]` - chunking and the default variant
//! - `[behavior]` - quit confirmation
//! - `[ui]` - preview toggle

use std::time::Duration;

use fontscope_client::{ClientConfig, DEFAULT_BASE_URL};
use fontscope_core::prelude::*;
use fontscope_core::AnalysisVariant;
use serde::{Deserialize, Serialize};

/// Global application settings from config.toml
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub upload: UploadSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Base URL the endpoint paths are appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (0 = wait indefinitely)
    #[serde(default)]
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UploadSettings {
    /// Upload chunk size in KiB
    #[serde(default = "default_chunk_size_kb")]
    pub chunk_size_kb: usize,

    /// Variant used by Enter before the selection moves, and by headless mode
    #[serde(default)]
    pub default_variant: AnalysisVariant,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            chunk_size_kb: default_chunk_size_kb(),
            default_variant: AnalysisVariant::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Ask before quitting while an analysis is running
    #[serde(default = "default_true")]
    pub confirm_quit: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self { confirm_quit: true }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Open a preview for the selected file
    #[serde(default = "default_true")]
    pub show_preview: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { show_preview: true }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_chunk_size_kb() -> usize {
    64
}

fn default_true() -> bool {
    true
}

impl Settings {
    /// Build the client configuration, validating the base URL
    pub fn client_config(&self) -> Result<ClientConfig> {
        let config = ClientConfig::new(&self.api.base_url)
            .map_err(|e| Error::config_invalid(e.to_string()))?;

        Ok(config
            .with_timeout(Duration::from_secs(self.api.timeout_secs))
            .with_chunk_size(self.upload.chunk_size_kb.saturating_mul(1024)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.api.base_url, "http://localhost:5000");
        assert_eq!(settings.api.timeout_secs, 0);
        assert_eq!(settings.upload.chunk_size_kb, 64);
        assert_eq!(settings.upload.default_variant, AnalysisVariant::Basic);
        assert!(settings.behavior.confirm_quit);
        assert!(settings.ui.show_preview);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[api]
timeout_secs = 30

[upload]
default_variant = "ocr"
"#,
        )
        .unwrap();

        assert_eq!(settings.api.base_url, "http://localhost:5000");
        assert_eq!(settings.api.timeout_secs, 30);
        assert_eq!(settings.upload.chunk_size_kb, 64);
        assert_eq!(settings.upload.default_variant, AnalysisVariant::Ocr);
        assert!(settings.behavior.confirm_quit);
    }

    #[test]
    fn test_client_config_from_settings() {
        let mut settings = Settings::default();
        settings.api.base_url = "https://fonts.example.com/".into();
        settings.api.timeout_secs = 5;
        settings.upload.chunk_size_kb = 8;

        let config = settings.client_config().unwrap();

        assert_eq!(config.base_url(), "https://fonts.example.com");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.chunk_size, 8 * 1024);
    }

    #[test]
    fn test_zero_timeout_means_none() {
        let config = Settings::default().client_config().unwrap();
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_invalid_base_url_is_config_invalid() {
        let mut settings = Settings::default();
        settings.api.base_url = "localhost:5000".into();

        let err = settings.client_config().unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
    }
}
