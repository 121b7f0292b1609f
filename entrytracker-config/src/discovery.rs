//! Configuration file discovery
//!
//! Looks for `config.{toml,yaml,yml,json}` in the global `~/.entrytracker/`
//! directory and the project `./.entrytracker/` directory. Project files take
//! precedence over global ones.

use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Directory name searched in both the home and working directories.
pub const CONFIG_DIR_NAME: &str = ".entrytracker";

/// Base file name (without extension) of a configuration file.
pub const CONFIG_FILE_STEM: &str = "config";

/// Represents a discovered configuration file with metadata
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Full path to the configuration file
    pub path: PathBuf,
    /// Detected format of the file (TOML, YAML, JSON)
    pub format: ConfigFormat,
    /// Scope indicating where the file was found (global vs project)
    pub scope: ConfigScope,
}

/// Configuration file format detected from file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Detect format from a path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

/// Configuration scope indicating where the file was discovered
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfigScope {
    /// Global configuration from ~/.entrytracker/
    Global,
    /// Project configuration from ./.entrytracker/
    Project,
}

/// File discovery service for finding configuration files
#[derive(Debug, Clone, Default)]
pub struct FileDiscovery {
    project_dir: Option<PathBuf>,
    global_dir: Option<PathBuf>,
}

impl FileDiscovery {
    /// Discover in the standard locations, resolved at discovery time.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discover in explicit directories instead of the standard ones.
    pub fn with_dirs(project_dir: Option<PathBuf>, global_dir: Option<PathBuf>) -> Self {
        Self {
            project_dir,
            global_dir,
        }
    }

    /// Discover all configuration files, lowest precedence first.
    pub fn discover_all(&self) -> Vec<ConfigFile> {
        let project_dir = self.project_dir.clone().or_else(Self::resolve_project_dir);
        let global_dir = self.global_dir.clone().or_else(Self::resolve_global_dir);

        let mut files = Vec::new();
        if let Some(ref dir) = global_dir {
            files.extend(Self::search_directory(dir, ConfigScope::Global));
        }
        if let Some(ref dir) = project_dir {
            files.extend(Self::search_directory(dir, ConfigScope::Project));
        }

        debug!("Discovered {} configuration files", files.len());
        files
    }

    fn search_directory(dir: &Path, scope: ConfigScope) -> Vec<ConfigFile> {
        let mut files = Vec::new();
        if !dir.is_dir() {
            trace!("Config directory absent: {}", dir.display());
            return files;
        }
        for ext in ["toml", "yaml", "yml", "json"] {
            let path = dir.join(format!("{CONFIG_FILE_STEM}.{ext}"));
            if path.is_file() {
                if let Some(format) = ConfigFormat::from_extension(ext) {
                    trace!("Found config: {} ({:?})", path.display(), format);
                    files.push(ConfigFile {
                        path,
                        format,
                        scope,
                    });
                }
            }
        }
        files
    }

    fn resolve_project_dir() -> Option<PathBuf> {
        std::env::current_dir()
            .ok()
            .map(|cwd| cwd.join(CONFIG_DIR_NAME))
    }

    fn resolve_global_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ConfigFormat::from_extension("TOML"), Some(ConfigFormat::Toml));
        assert_eq!(ConfigFormat::from_extension("yml"), Some(ConfigFormat::Yaml));
        assert_eq!(ConfigFormat::from_extension("json"), Some(ConfigFormat::Json));
        assert_eq!(ConfigFormat::from_extension("ini"), None);
        assert_eq!(
            ConfigFormat::from_path(Path::new("a/config.yaml")),
            Some(ConfigFormat::Yaml)
        );
        assert_eq!(ConfigFormat::from_path(Path::new("a/config")), None);
    }

    #[test]
    fn test_project_files_come_after_global() {
        let global = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        fs::write(global.path().join("config.toml"), "").unwrap();
        fs::write(project.path().join("config.json"), "{}").unwrap();
        fs::write(project.path().join("notes.txt"), "").unwrap();

        let discovery = FileDiscovery::with_dirs(
            Some(project.path().to_path_buf()),
            Some(global.path().to_path_buf()),
        );
        let files = discovery.discover_all();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].scope, ConfigScope::Global);
        assert_eq!(files[0].format, ConfigFormat::Toml);
        assert_eq!(files[1].scope, ConfigScope::Project);
        assert_eq!(files[1].format, ConfigFormat::Json);
    }

    #[test]
    fn test_missing_directories_yield_nothing() {
        let tmp = TempDir::new().unwrap();
        let discovery = FileDiscovery::with_dirs(
            Some(tmp.path().join("absent")),
            Some(tmp.path().join("also-absent")),
        );
        assert!(discovery.discover_all().is_empty());
    }
}
