//! Registry configuration values.

use entrytracker_fields::{EntryTracker, RegistryOptions};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::error::{ConfigError, ConfigResult};

/// Largest `initial_capacity` accepted from configuration.
pub const MAX_INITIAL_CAPACITY: usize = 1 << 20;

/// Settings that shape a registry and its diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Warn when a field name is registered twice.
    pub warn_on_duplicate: bool,
    /// Warn when a field is re-registered with a different type or prototype.
    pub warn_on_mismatch: bool,
    /// Definitions to reserve room for before the first registration.
    pub initial_capacity: usize,
    /// `tracing` filter directives, e.g. `entrytracker_fields=debug`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        let options = RegistryOptions::default();
        Self {
            warn_on_duplicate: options.warn_on_duplicate,
            warn_on_mismatch: options.warn_on_mismatch,
            initial_capacity: options.initial_capacity,
            log_filter: None,
        }
    }
}

impl TrackerConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "initial_capacity {} exceeds maximum {}",
                    self.initial_capacity, MAX_INITIAL_CAPACITY
                ),
            });
        }
        if let Some(directives) = self.log_filter.as_deref() {
            EnvFilter::try_new(directives).map_err(|e| ConfigError::ValidationError {
                message: format!("invalid log_filter '{directives}': {e}"),
            })?;
        }
        Ok(())
    }

    pub fn registry_options(&self) -> RegistryOptions {
        RegistryOptions {
            warn_on_duplicate: self.warn_on_duplicate,
            warn_on_mismatch: self.warn_on_mismatch,
            initial_capacity: self.initial_capacity,
        }
    }

    /// A fresh, empty registry configured from these settings.
    pub fn build_registry(&self) -> EntryTracker {
        EntryTracker::with_options(self.registry_options())
    }

    /// Install the stderr log subscriber using `log_filter`.
    pub fn init_logging(&self) {
        entrytracker_common::init_tracing(self.log_filter.as_deref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_registry_defaults() {
        let config = TrackerConfig::default();
        assert_eq!(config.registry_options(), RegistryOptions::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_capacity_limit() {
        let config = TrackerConfig {
            initial_capacity: MAX_INITIAL_CAPACITY + 1,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("initial_capacity"));
    }

    #[test]
    fn test_log_filter_is_checked() {
        let valid = TrackerConfig {
            log_filter: Some("entrytracker_fields=debug,warn".into()),
            ..Default::default()
        };
        assert!(valid.validate().is_ok());

        let typo = TrackerConfig {
            log_filter: Some("entrytracker_fields=verbose".into()),
            ..Default::default()
        };
        let err = typo.validate().unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
        assert!(err.to_string().contains("log_filter"));
    }

    #[test]
    fn test_build_registry_applies_options() {
        let config = TrackerConfig {
            warn_on_duplicate: false,
            initial_capacity: 64,
            ..Default::default()
        };
        let tracker = config.build_registry();
        assert!(!tracker.options().warn_on_duplicate);
        assert!(tracker.options().warn_on_mismatch);
        assert_eq!(tracker.options().initial_capacity, 64);
        assert!(tracker.is_empty());
    }
}
