//! Configuration types for the overlap engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from `engine.yaml`. Every section has defaults, so a
//! partial file (or none at all) is valid.

use chrono::{NaiveDate, Utc};
use serde::Deserialize;

/// Which uploaded files are accepted as assignment tables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UploadConfig {
    /// Required file name suffix (e.g., ".csv").
    #[serde(default = "default_extension")]
    pub accepted_extension: String,
    /// Accepted declared media types.
    #[serde(default = "default_media_types")]
    pub accepted_media_types: Vec<String>,
}

fn default_extension() -> String {
    ".csv".to_string()
}

fn default_media_types() -> Vec<String> {
    vec!["text/csv".to_string(), "application/vnd.ms-excel".to_string()]
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            accepted_extension: default_extension(),
            accepted_media_types: default_media_types(),
        }
    }
}

/// Date interpretation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DateConfig {
    /// Fixed "today" for blank and `NULL` date cells.
    ///
    /// When absent, the current UTC date is used.
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
}

impl DateConfig {
    /// Returns the configured reference date, or the current UTC date.
    pub fn today(&self) -> NaiveDate {
        self.reference_date.unwrap_or_else(|| Utc::now().date_naive())
    }
}

/// The complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    /// Upload acceptance rules.
    #[serde(default)]
    pub upload: UploadConfig,
    /// Date interpretation settings.
    #[serde(default)]
    pub dates: DateConfig,
}
