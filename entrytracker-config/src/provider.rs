//! Configuration provider using Figment

use std::path::Path;

use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use tracing::{debug, trace};

use crate::discovery::{ConfigFile, ConfigFormat, FileDiscovery};
use crate::error::{ConfigError, ConfigResult};
use crate::types::TrackerConfig;

/// Prefix of environment variables read into the configuration.
pub const ENV_PREFIX: &str = "ENTRYTRACKER_";

/// Configuration provider using figment
///
/// Sources are merged in precedence order (later sources override earlier ones):
/// 1. Default values
/// 2. Discovered configuration files, global then project
/// 3. Environment variables with the `ENTRYTRACKER_` prefix
#[derive(Debug, Clone, Default)]
pub struct ConfigProvider {
    discovery: FileDiscovery,
}

impl ConfigProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom discovery, e.g. one rooted in a test directory.
    pub fn with_discovery(discovery: FileDiscovery) -> Self {
        Self { discovery }
    }

    /// Load from defaults, discovered files and the environment.
    pub fn load(&self) -> ConfigResult<TrackerConfig> {
        let mut figment = Self::defaults();
        for file in self.discovery.discover_all() {
            trace!("Loading config file: {}", file.path.display());
            figment = figment.merge(Self::file_provider(&file));
        }
        Self::extract(figment.merge(Self::env()))
    }

    /// Load from defaults, one explicit file and the environment.
    pub fn load_from(&self, path: &Path) -> ConfigResult<TrackerConfig> {
        if !path.is_file() {
            return Err(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let format = ConfigFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
            format: path
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("<none>")
                .to_string(),
        })?;
        let figment = Self::defaults()
            .merge(Self::format_provider(path, format))
            .merge(Self::env());
        Self::extract(figment)
    }

    fn defaults() -> Figment {
        Figment::from(Serialized::defaults(TrackerConfig::default()))
    }

    fn env() -> Env {
        Env::prefixed(ENV_PREFIX)
    }

    fn file_provider(file: &ConfigFile) -> Figment {
        Self::format_provider(&file.path, file.format)
    }

    fn format_provider(path: &Path, format: ConfigFormat) -> Figment {
        match format {
            ConfigFormat::Toml => Figment::from(Toml::file(path)),
            ConfigFormat::Yaml => Figment::from(Yaml::file(path)),
            ConfigFormat::Json => Figment::from(Json::file(path)),
        }
    }

    fn extract(figment: Figment) -> ConfigResult<TrackerConfig> {
        let config: TrackerConfig = figment.extract()?;
        config.validate()?;
        debug!(
            warn_on_duplicate = config.warn_on_duplicate,
            warn_on_mismatch = config.warn_on_mismatch,
            initial_capacity = config.initial_capacity,
            "loaded registry configuration"
        );
        Ok(config)
    }
}
