//! Application state for the Policy Cost Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::EngineConfig;
use crate::source::PolicySource;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// policy data source and the engine configuration.
#[derive(Clone)]
pub struct AppState {
    source: Arc<dyn PolicySource>,
    config: Arc<EngineConfig>,
}

impl AppState {
    /// Creates a new application state with the given source and configuration.
    pub fn new(source: Arc<dyn PolicySource>, config: EngineConfig) -> Self {
        Self {
            source,
            config: Arc::new(config),
        }
    }

    /// Returns the policy data source.
    pub fn source(&self) -> &dyn PolicySource {
        self.source.as_ref()
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
