//! Application state for the overlap engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::parsing::DateInterpreter;

/// Shared application state.
///
/// Holds the loaded configuration; everything else a request needs is
/// built per request.
#[derive(Clone)]
pub struct AppState {
    /// The loaded engine configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Builds a date interpreter anchored at the configured "today".
    ///
    /// The date is read per call so a long-running server rolls over at
    /// midnight UTC unless a reference date is pinned.
    pub fn interpreter(&self) -> DateInterpreter {
        DateInterpreter::new(self.config.today())
    }
}
