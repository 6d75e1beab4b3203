//! Configuration loading and management for the overlap engine.
//!
//! This module loads `engine.yaml`, which controls which uploads are
//! accepted and which date counts as "today" for open-ended assignments.
//!
//! # Example
//!
//! ```no_run
//! use overlap_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Today is {}", config.today());
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{DateConfig, EngineConfig, UploadConfig};
