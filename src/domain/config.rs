//! Config - Application Configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LOG_CAPACITY, DEFAULT_SUBMIT_DELAY_MS, DEFAULT_SUBMIT_TIMEOUT_MS};
use crate::domain::hobbies::FirstEntryPolicy;
use crate::i18n::Locale;

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// UI language
    pub locale: Locale,
    /// Simulated submission round trip in milliseconds
    pub submit_delay_ms: u64,
    /// Submission timeout in milliseconds
    pub submit_timeout_ms: u64,
    /// Whether the first hobby row can be removed
    pub first_entry_policy: FirstEntryPolicy,
    /// Log panel capacity
    pub log_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            submit_timeout_ms: DEFAULT_SUBMIT_TIMEOUT_MS,
            first_entry_policy: FirstEntryPolicy::default(),
            log_capacity: DEFAULT_LOG_CAPACITY,
        }
    }
}

impl AppConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn submit_timeout(&self) -> Duration {
        Duration::from_millis(self.submit_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "first_entry_policy": "removable" }"#).expect("parse");
        assert_eq!(config.first_entry_policy, FirstEntryPolicy::Removable);
        assert_eq!(config.submit_delay(), Duration::from_millis(2000));
        assert_eq!(config.locale, Locale::JaJP);
    }

    #[test]
    fn test_locale_serialized_as_tag() {
        let config = AppConfig {
            locale: Locale::EnUS,
            ..Default::default()
        };
        let json = serde_json::to_value(&config).expect("serialize");
        assert_eq!(json["locale"], "en-US");
        assert_eq!(json["first_entry_policy"], "pinned");
    }
}
