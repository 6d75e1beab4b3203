//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, UploadConfig};

/// Name of the configuration file inside a configuration directory.
pub const CONFIG_FILE_NAME: &str = "engine.yaml";

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── engine.yaml   # Upload rules and date settings
/// ```
///
/// # Example
///
/// ```no_run
/// use overlap_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// println!("Accepting {} files", loader.upload().accepted_extension);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `engine.yaml` is missing
    /// - `engine.yaml` contains invalid YAML or mistyped fields
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let config_path = path.as_ref().join(CONFIG_FILE_NAME);
        let config = Self::load_yaml::<EngineConfig>(&config_path)?;
        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the upload acceptance rules.
    pub fn upload(&self) -> &UploadConfig {
        &self.config.upload
    }

    /// Returns the date used for blank and `NULL` cells.
    pub fn today(&self) -> NaiveDate {
        self.config.dates.today()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use uuid::Uuid;

    fn config_path() -> &'static str {
        "./config"
    }

    fn scratch_dir_with(content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("overlap-engine-{}", Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(CONFIG_FILE_NAME), content).unwrap();
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.upload().accepted_extension, ".csv");
        assert!(
            loader
                .upload()
                .accepted_media_types
                .contains(&"application/vnd.ms-excel".to_string())
        );
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("engine.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let dir = scratch_dir_with("dates:\n  reference_date: [not, a, date]\n");

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("engine.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_reference_date_pins_today() {
        let dir = scratch_dir_with("dates:\n  reference_date: 2023-03-01\n");

        let loader = ConfigLoader::load(&dir).unwrap();
        assert_eq!(loader.today(), NaiveDate::from_ymd_opt(2023, 3, 1).unwrap());

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_from_config_uses_given_values() {
        let mut config = EngineConfig::default();
        config.upload.accepted_extension = ".tsv".to_string();

        let loader = ConfigLoader::from_config(config);
        assert_eq!(loader.upload().accepted_extension, ".tsv");
    }
}
