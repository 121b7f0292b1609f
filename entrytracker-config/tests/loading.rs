//! Loading registry configuration from files and the environment.

use std::fs;
use std::path::Path;

use entrytracker_config::{ConfigError, ConfigProvider, FileDiscovery, TrackerConfig};
use serial_test::serial;
use tempfile::TempDir;

/// Provider that only looks inside `project` and `global`.
fn isolated(project: &Path, global: &Path) -> ConfigProvider {
    ConfigProvider::with_discovery(FileDiscovery::with_dirs(
        Some(project.to_path_buf()),
        Some(global.to_path_buf()),
    ))
}

/// Removes an environment variable when dropped.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn set(key: &'static str, value: &str) -> Self {
        std::env::set_var(key, value);
        Self(key)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        std::env::remove_var(self.0);
    }
}

#[test]
#[serial]
fn defaults_when_nothing_configured() {
    let tmp = TempDir::new().unwrap();
    let config = isolated(&tmp.path().join("p"), &tmp.path().join("g"))
        .load()
        .unwrap();
    assert_eq!(config, TrackerConfig::default());
}

#[test]
#[serial]
fn project_file_overrides_global_file() {
    let global = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    fs::write(
        global.path().join("config.toml"),
        "warn_on_duplicate = false\ninitial_capacity = 16\n",
    )
    .unwrap();
    fs::write(project.path().join("config.yaml"), "initial_capacity: 256\n").unwrap();

    let config = isolated(project.path(), global.path()).load().unwrap();
    assert!(!config.warn_on_duplicate);
    assert!(config.warn_on_mismatch);
    assert_eq!(config.initial_capacity, 256);
}

#[test]
#[serial]
fn environment_overrides_files() {
    let project = TempDir::new().unwrap();
    let global = TempDir::new().unwrap();
    fs::write(
        project.path().join("config.json"),
        r#"{"warn_on_mismatch": true, "log_filter": "info"}"#,
    )
    .unwrap();

    let _mismatch = EnvGuard::set("ENTRYTRACKER_WARN_ON_MISMATCH", "false");
    let _filter = EnvGuard::set("ENTRYTRACKER_LOG_FILTER", "entrytracker_fields=debug");

    let config = isolated(project.path(), global.path()).load().unwrap();
    assert!(!config.warn_on_mismatch);
    assert_eq!(config.log_filter.as_deref(), Some("entrytracker_fields=debug"));
}

#[test]
#[serial]
fn explicit_file_is_loaded() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("registry.toml");
    fs::write(&path, "warn_on_duplicate = false\n").unwrap();

    let config = ConfigProvider::new().load_from(&path).unwrap();
    assert!(!config.warn_on_duplicate);

    let tracker = config.build_registry();
    assert!(!tracker.options().warn_on_duplicate);
}

#[test]
#[serial]
fn explicit_file_errors() {
    let tmp = TempDir::new().unwrap();

    let missing = tmp.path().join("missing.toml");
    assert!(matches!(
        ConfigProvider::new().load_from(&missing),
        Err(ConfigError::FileNotFound { .. })
    ));

    let ini = tmp.path().join("registry.ini");
    fs::write(&ini, "x=1").unwrap();
    assert!(matches!(
        ConfigProvider::new().load_from(&ini),
        Err(ConfigError::UnsupportedFormat { ref format }) if format == "ini"
    ));

    let bad = tmp.path().join("bad.toml");
    fs::write(&bad, "initial_capacity = \"lots\"\n").unwrap();
    assert!(matches!(
        ConfigProvider::new().load_from(&bad),
        Err(ConfigError::ParseError { .. })
    ));

    let huge = tmp.path().join("huge.toml");
    fs::write(&huge, "initial_capacity = 99999999\n").unwrap();
    assert!(matches!(
        ConfigProvider::new().load_from(&huge),
        Err(ConfigError::ValidationError { .. })
    ));
}
