use crate::constants::{env_vars, files};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
///
/// Only ambient settings live here. The promotional window and the
/// standings tie-break order are fixed product rules.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    /// Default tour snapshot (JSON) used when `--data` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<String>,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing file yields the default configuration.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `TOUR_STANDINGS_DATA_FILE` - Override snapshot path
    /// - `TOUR_STANDINGS_LOG_FILE` - Override log file path
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(AppError)` - Config file exists but could not be read or is invalid
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(data_file) = std::env::var(env_vars::DATA_FILE) {
            self.data_file = Some(data_file);
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(&self.data_file, &self.log_file_path)
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location and current settings
    /// - Handles case when no config file exists
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if !Path::new(&config_path).exists() {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            return Ok(());
        }

        let config = Config::load().await?;
        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        println!("────────────────────────────────────");
        println!("Tour Data File:");
        match &config.data_file {
            Some(data_file) => println!("{data_file}"),
            None => println!("(not set, use --data)"),
        }
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{}", files::LOG_FILE);
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
data_file = "/srv/tour/snapshot.json"
log_file_path = "/custom/log/path"
"#;
        tokio::fs::write(&config_path, config_content)
            .await
            .unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config.data_file, Some("/srv/tour/snapshot.json".to_string()));
        assert_eq!(config.log_file_path, Some("/custom/log/path".to_string()));
    }

    #[tokio::test]
    async fn test_config_load_empty_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        tokio::fs::write(&config_path, "").await.unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(config, Config::default());
    }

    #[tokio::test]
    async fn test_config_save_creates_directory() {
        let temp_dir = tempdir().unwrap();
        let config_dir = temp_dir.path().join("tour_standings");
        let config_path = config_dir.join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let config = Config {
            data_file: Some("tour.json".to_string()),
            log_file_path: None,
        };
        config.save_to_path(&config_path_str).await.unwrap();
        assert!(config_dir.exists());
        assert!(config_path.exists());
    }

    #[tokio::test]
    async fn test_config_save_and_load_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let original_config = Config {
            data_file: Some("/srv/tour/snapshot.json".to_string()),
            log_file_path: Some("/custom/log/path".to_string()),
        };
        original_config
            .save_to_path(&config_path_str)
            .await
            .unwrap();

        let content = tokio::fs::read_to_string(&config_path).await.unwrap();
        assert!(
            content.contains("data_file") && content.contains("/srv/tour/snapshot.json"),
            "Content should contain data_file. Content: {content}"
        );

        let loaded_config = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(original_config, loaded_config);
    }

    #[test]
    fn test_unset_fields_are_not_serialized() {
        let toml_string = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(!toml_string.contains("data_file"));
        assert!(!toml_string.contains("log_file_path"));
    }

    #[tokio::test]
    async fn test_config_load_invalid_toml() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        tokio::fs::write(&config_path, "data_file = [1, 2, \"unclosed")
            .await
            .unwrap();

        let result = Config::load_from_path(&config_path_str).await;
        assert!(matches!(result, Err(AppError::TomlDeserialize(_))));
    }

    #[test]
    fn test_get_config_path() {
        let config_path = Config::get_config_path();

        assert!(config_path.contains("tour_standings"));
        assert!(config_path.ends_with("config.toml"));
    }

    #[test]
    fn test_get_log_dir_path() {
        let log_dir_path = Config::get_log_dir_path();

        assert!(log_dir_path.contains("tour_standings"));
        assert!(log_dir_path.ends_with("logs"));
    }
}
