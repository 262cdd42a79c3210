//! Settings loading and the default config file

use std::path::{Path, PathBuf};

use fontscope_core::prelude::*;

use super::types::Settings;

/// Directory under the user config dir
const CONFIG_DIR: &str = "fontscope";
const CONFIG_FILENAME: &str = "config.toml";

/// Overrides `[api] base_url` from the config file
pub const API_URL_ENV: &str = "FONTSCOPE_API_URL";

const DEFAULT_CONFIG: &str = r#"# fontscope configuration

[api]
base_url = "http://localhost:5000"   # Analysis service address (FONTSCOPE_API_URL overrides)
timeout_secs = 0                     # 0 = wait indefinitely

[upload]
chunk_size_kb = 64                   # Progress is reported once per chunk
default_variant = "basic"            # basic, detailed, advanced or ocr

[behavior]
confirm_quit = true                  # Ask before quitting during an analysis

[ui]
show_preview = true                  # Read the selected file's header for the preview
"#;

/// `<config_dir>/fontscope/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`, falling back to defaults if the file
/// is missing or invalid
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Apply the base URL overrides: `cli_url` wins over the environment,
/// which wins over the file
pub fn apply_api_url_override(settings: &mut Settings, cli_url: Option<&str>) {
    if let Some(url) = cli_url {
        debug!("Using API URL from command line: {}", url);
        settings.api.base_url = url.to_string();
        return;
    }

    if let Ok(url) = std::env::var(API_URL_ENV) {
        if !url.trim().is_empty() {
            debug!("Using API URL from {}: {}", API_URL_ENV, url);
            settings.api.base_url = url;
        }
    }
}

/// Write the commented default config to `config_path`.
///
/// Returns `false` without touching the file if it already exists.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", config_path, e)))?;
    info!("Created config file at {:?}", config_path);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fontscope_core::AnalysisVariant;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(&temp.path().join("config.toml"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_invalid_file_gives_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[api\nbase_url = ").unwrap();

        assert_eq!(load_settings(&path), Settings::default());
    }

    #[test]
    fn test_load_custom_settings() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[api]
base_url = "http://fonts.internal:8080"

[behavior]
confirm_quit = false
"#,
        )
        .unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings.api.base_url, "http://fonts.internal:8080");
        assert!(!settings.behavior.confirm_quit);
        assert!(settings.ui.show_preview);
    }

    #[test]
    fn test_init_config_file_writes_valid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        assert!(init_config_file(&path).unwrap());

        let content = std::fs::read_to_string(&path).unwrap();
        let settings: Settings = toml::from_str(&content).expect("default config should parse");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.upload.default_variant, AnalysisVariant::Basic);
    }

    #[test]
    fn test_init_config_file_keeps_existing() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[ui]\nshow_preview = false\n").unwrap();

        assert!(!init_config_file(&path).unwrap());
        assert!(!load_settings(&path).ui.show_preview);
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        std::env::set_var(API_URL_ENV, "http://env.example:9000");
        let mut settings = Settings::default();

        apply_api_url_override(&mut settings, None);

        std::env::remove_var(API_URL_ENV);
        assert_eq!(settings.api.base_url, "http://env.example:9000");
    }

    #[test]
    #[serial]
    fn test_cli_overrides_env() {
        std::env::set_var(API_URL_ENV, "http://env.example:9000");
        let mut settings = Settings::default();

        apply_api_url_override(&mut settings, Some("http://cli.example:7000"));

        std::env::remove_var(API_URL_ENV);
        assert_eq!(settings.api.base_url, "http://cli.example:7000");
    }

    #[test]
    #[serial]
    fn test_no_override_keeps_file_value() {
        std::env::remove_var(API_URL_ENV);
        let mut settings = Settings::default();
        settings.api.base_url = "http://file.example".into();

        apply_api_url_override(&mut settings, None);

        assert_eq!(settings.api.base_url, "http://file.example");
    }
}
