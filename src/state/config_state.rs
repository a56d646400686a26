//! ConfigState - Application Configuration State

use crate::domain::config::AppConfig;

/// State for application configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration
    pub config: AppConfig,
}

impl ConfigState {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Update configuration
    pub fn update_config(&mut self, config: AppConfig) {
        self.config = config;
    }
}
